//! Application configuration

use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Explicit yt-dlp binary; `None` means search PATH and common locations
    pub ytdlp_path: Option<PathBuf>,

    /// JavaScript runtime handed to `--js-runtimes`
    pub js_runtime: String,

    /// Component bundle handed to `--remote-components`
    pub remote_components: String,

    /// Container used for `--merge-output-format`
    pub merge_format: String,

    /// Target of `--audio-format` for audio-only downloads
    pub audio_format: String,

    /// `--audio-quality` value (0 = best)
    pub audio_quality: String,

    /// Maximum number of rows printed in the format table
    pub display_limit: usize,

    /// Destination used when the directory prompt is left blank
    pub default_destination: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ytdlp_path: None,
            js_runtime: "node".to_string(),
            remote_components: "ejs:github".to_string(),
            merge_format: "mp4".to_string(),
            audio_format: "mp3".to_string(),
            audio_quality: "0".to_string(),
            display_limit: 20,
            default_destination: PathBuf::from("."),
        }
    }
}
