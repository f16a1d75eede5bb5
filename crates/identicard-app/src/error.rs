use std::path::PathBuf;

use identicard_core::constants::EMPTY_RECORD_MESSAGE;
use identicard_rfc::rfc::validation::ValidationResult;
use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read identity record from {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid identity record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Validation failed for {} field(s)", .0.len())]
    ValidationFailed(ValidationResult),

    #[error("{}", EMPTY_RECORD_MESSAGE)]
    EmptyRecord,

    #[error("Failed to save {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] identicard_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
