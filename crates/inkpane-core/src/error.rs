//! Error types for editor operations.

use thiserror::Error;

/// Editor errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Not an image: {0}")]
    NotAnImage(String),
    #[error("Bitmap has no area: {width}x{height}")]
    EmptyBitmap { width: u32, height: u32 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
