use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Not enough data to derive levels: {0}")]
    NotEnoughData(String),

    #[error("Price column conversion failed: {0}")]
    Conversion(#[from] core_types::CoreError),
}
