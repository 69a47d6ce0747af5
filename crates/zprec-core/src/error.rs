use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZpError>;

#[derive(Debug, Error)]
pub enum ZpError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("study format error: {0}")]
    StudyFormat(String),
}
