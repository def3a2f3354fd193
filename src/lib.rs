//! Rustpick library

pub mod app;
pub mod extractor;
pub mod menu;
pub mod utils;

// Re-export main types for easier use
pub use app::{Session, SessionOutcome};
pub use extractor::{DownloadOutcome, DownloadRequest, Format, MediaTool, VideoInfo, YtDlpTool};
pub use menu::{Choice, DisplayOption};
pub use utils::{AppSettings, RustpickError};
