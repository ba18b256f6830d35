// Error types for the vane application.
// Covers settings storage, serialization, and terminal IO failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VaneError>;
