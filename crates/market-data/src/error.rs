use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("No price data available for {0}")]
    NoData(String),

    #[error("Failed to read price data for {0}")]
    Io(String, #[source] std::io::Error),

    #[error("Malformed price data for {0}")]
    Malformed(String, #[source] serde_json::Error),

    #[error("Invalid price data for {0}: {1}")]
    Invalid(String, String),
}
