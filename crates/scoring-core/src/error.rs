use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid price history: {0}")]
    InvalidHistory(String),

    #[error("Provider failure: {0}")]
    Provider(String),
}
