use analyzer::AnalysisResult;
use core_types::CriterionResult;

/// One criterion as a check-marked reason line.
pub fn criterion_line(criterion: &CriterionResult) -> String {
    let mark = if criterion.satisfied { '\u{2713}' } else { '\u{2717}' };
    format!("{mark} {} ({})", criterion.name, criterion.evidence)
}

/// The flat reason list chat formatters consume: the bullish section
/// first, then the bearish one. The sentinel collapses to its single
/// fetch-failure line.
pub fn reason_lines(result: &AnalysisResult) -> Vec<String> {
    if result.is_unknown() {
        return vec![format!("\u{2717} Unable to fetch data for {}", result.symbol)];
    }
    result
        .bullish_criteria
        .iter()
        .chain(result.bearish_criteria.iter())
        .map(criterion_line)
        .collect()
}
