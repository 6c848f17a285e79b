use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Invalid input: {0}")]
    #[allow(dead_code)]
    InvalidInput(String),
}
