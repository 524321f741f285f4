use analyzer::{AnalysisResult, Analyzer};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use configuration::{Config, load_config_from};
use indicatif::{ProgressBar, ProgressStyle};
use levels::LevelEngine;
use market_data::{FileProvider, MarketDataProvider};
use tracker::{AlertPolicy, JsonFileStore, ScanOutcome};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Lodestar analysis application.
fn main() -> Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments and execute the appropriate command.
    let cli = Cli::parse();
    let config = load_config_from(&cli.config).context("Failed to load configuration")?;

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, config),
        Commands::Scan(args) => handle_scan(args, config),
        Commands::Levels(args) => handle_levels(args, config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Rule-based trend analysis and options setups for stock symbols.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis for one symbol and print the report.
    Analyze(AnalyzeArgs),

    /// Analyze the configured watchlist and raise alerts.
    Scan(ScanArgs),

    /// Print the support/resistance picture for one symbol.
    Levels(LevelsArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The symbol to analyze (e.g., "AAPL").
    symbol: String,

    /// The as-of date for the analysis (format: YYYY-MM-DD, default today).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Emit the raw analysis record as JSON instead of the report.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ScanArgs {
    /// The as-of date for the analysis (format: YYYY-MM-DD, default today).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Emit all analysis records as JSON instead of the summary table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct LevelsArgs {
    /// The symbol to derive levels for (e.g., "AAPL").
    symbol: String,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Handles the `analyze` command for a single symbol.
fn handle_analyze(args: AnalyzeArgs, config: Config) -> Result<()> {
    let provider = FileProvider::new(config.data.data_dir.clone());
    let analyzer = Analyzer::new(&config);
    let as_of = args.date.unwrap_or_else(today);

    let result = analyzer.analyze_symbol(&provider, &args.symbol, as_of);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        println!("{}", report::render(&result));
    }
    Ok(())
}

/// Handles the `scan` command across the configured watchlist.
fn handle_scan(args: ScanArgs, config: Config) -> Result<()> {
    let provider = FileProvider::new(config.data.data_dir.clone());
    let analyzer = Analyzer::new(&config);
    let policy = AlertPolicy::new(config.scanner.clone());
    let mut store = JsonFileStore::load(config.scanner.alert_history_path.clone())
        .context("Failed to open alert history")?;
    let as_of = args.date.unwrap_or_else(today);

    println!("--- Scanning {} symbols ---", config.scanner.watchlist.len());

    // Set up the progress bar
    let progress_bar = ProgressBar::new(config.scanner.watchlist.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    let mut outcomes: Vec<ScanOutcome> = Vec::with_capacity(config.scanner.watchlist.len());
    for symbol in &config.scanner.watchlist {
        progress_bar.set_message(format!("Analyzing {symbol}..."));
        let result = analyzer.analyze_symbol(&provider, symbol, as_of);
        let outcome = policy
            .evaluate(result, &mut store, Utc::now())
            .context("Failed to record alert history")?;
        outcomes.push(outcome);
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("Scan complete");

    if args.json {
        let results: Vec<&AnalysisResult> =
            outcomes.iter().map(|outcome| &outcome.result).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?
        );
        return Ok(());
    }

    let results: Vec<AnalysisResult> = outcomes
        .iter()
        .map(|outcome| outcome.result.clone())
        .collect();
    println!("{}", report::scan_summary(&results));

    for outcome in &outcomes {
        if outcome.alerted() {
            println!();
            println!(
                "ALERT: {} {}",
                outcome.result.symbol,
                outcome.result.decision.options_recommendation.strategy
            );
            for line in report::reason_lines(&outcome.result) {
                println!("  {line}");
            }
        }
    }

    let suppressed = outcomes
        .iter()
        .filter(|outcome| outcome.suppressed_by_cooldown)
        .count();
    if suppressed > 0 {
        println!();
        println!("{suppressed} signal(s) suppressed by cooldown");
    }
    Ok(())
}

/// Handles the `levels` command for a single symbol.
fn handle_levels(args: LevelsArgs, config: Config) -> Result<()> {
    let provider = FileProvider::new(config.data.data_dir.clone());
    let engine = LevelEngine::new(config.levels.clone());

    let snapshot = provider
        .fetch(&args.symbol)
        .with_context(|| format!("Failed to fetch price data for {}", args.symbol))?;
    let levels = engine
        .derive(&snapshot.series)
        .with_context(|| format!("Failed to derive levels for {}", args.symbol))?;

    println!("{}", report::render_levels(&snapshot.symbol, &levels));
    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
