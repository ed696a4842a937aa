use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Every variant carries a stable code and knows whether the user can fix it
/// by choosing a different file.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::Extraction(e) => e.code(),
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True when retrying with a different file may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Extraction(_) | AppError::FileTooLarge { .. })
    }
}
