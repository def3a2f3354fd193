//! Error handling for Rustpick

use thiserror::Error;

/// Main error type for Rustpick
///
/// Every variant is fatal: `main` prints the message and exits with status 1.
#[derive(Debug, Error)]
pub enum RustpickError {
    #[error("Error: yt-dlp is not installed.\nInstall with: pip install yt-dlp\nOr on macOS: brew install yt-dlp")]
    YtDlpNotFound,

    #[error("Invalid URL.")]
    InvalidUrl,

    #[error("Error fetching video info: {0}")]
    ExtractionError(String),

    #[error("No formats available.")]
    NoFormats,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
