// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigurationError;
pub use settings::{
    AnalysisSettings, Config, DataSettings, LevelsSettings, RiskSettings, ScannerSettings,
};

/// The configuration file searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. The file is
/// optional: every setting has a default matching the fixed rule set, so
/// a missing file yields the canonical configuration and a partial file
/// overrides only what it names.
pub fn load_config() -> Result<Config, ConfigurationError> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

/// Loads configuration from an explicit path, for tests and the CLI's
/// `--config` flag.
pub fn load_config_from(path: &str) -> Result<Config, ConfigurationError> {
    tracing::debug!(path, "Loading configuration");

    let builder = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects configurations the engines cannot run with.
fn validate(config: &Config) -> Result<(), ConfigurationError> {
    if config.levels.num_levels == 0 {
        return Err(ConfigurationError::Validation(
            "levels.num_levels".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    if config.levels.swing_window == 0 {
        return Err(ConfigurationError::Validation(
            "levels.swing_window".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    if config.levels.lookback_days < config.levels.swing_window * 2 + 1 {
        return Err(ConfigurationError::Validation(
            "levels.lookback_days".to_string(),
            "must cover at least one full swing window".to_string(),
        ));
    }
    if config.risk.target_fallback_pcts.len() != 3 {
        return Err(ConfigurationError::Validation(
            "risk.target_fallback_pcts".to_string(),
            "must list exactly three percentages".to_string(),
        ));
    }
    if config.analysis.volume_lookback_days == 0 {
        return Err(ConfigurationError::Validation(
            "analysis.volume_lookback_days".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    if config.scanner.cooldown_hours < 0 {
        return Err(ConfigurationError::Validation(
            "scanner.cooldown_hours".to_string(),
            "must not be negative".to_string(),
        ));
    }
    if config.scanner.min_criteria_met > 5 {
        return Err(ConfigurationError::Validation(
            "scanner.min_criteria_met".to_string(),
            "cannot exceed the five-criteria checklist".to_string(),
        ));
    }
    Ok(())
}
