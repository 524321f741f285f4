use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Numeric conversion failed for {0}: {1} is not representable as f64")]
    NumericConversion(String, String),
}
