//! Utility modules for error handling, configuration and paths

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::RustpickError;
pub use paths::{output_template, resolve_destination};
