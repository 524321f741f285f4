use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Price column conversion failed: {0}")]
    Conversion(#[from] core_types::CoreError),
}
