//! Unified error type for the viewer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} is not UTF-8 text", .path.display())]
    NotText { path: PathBuf },
    #[error("Unknown colour: {0}")]
    UnknownColor(String),
}
