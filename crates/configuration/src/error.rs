use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to load configuration from file: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}: {1}")]
    Validation(String, String),
}
