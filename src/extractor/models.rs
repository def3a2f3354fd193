//! Data structures for video information and download requests

use serde::{Deserialize, Deserializer, Serialize};

/// Video information as reported by `yt-dlp --dump-json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration_string: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// One format variant of a video
///
/// A missing `vcodec`/`acodec` key deserializes as `Some("none")`; an explicit
/// JSON `null` stays `None` and is treated as a present stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<serde_json::Number>,
    #[serde(default = "missing_codec")]
    pub vcodec: Option<String>,
    #[serde(default = "missing_codec")]
    pub acodec: Option<String>,
    #[serde(default, deserialize_with = "lenient_size")]
    pub filesize: Option<u64>,
    #[serde(default, deserialize_with = "lenient_size")]
    pub filesize_approx: Option<u64>,
}

fn missing_codec() -> Option<String> {
    Some("none".to_string())
}

/// Byte counts arrive as integers or, from some extractors, as floats
fn lenient_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| {
        n.as_u64()
            .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
    }))
}

impl Default for Format {
    fn default() -> Self {
        Self {
            format_id: String::new(),
            ext: String::new(),
            resolution: None,
            fps: None,
            vcodec: missing_codec(),
            acodec: missing_codec(),
            filesize: None,
            filesize_approx: None,
        }
    }
}

impl Format {
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    /// Exact size when known and non-zero, otherwise the approximate one
    pub fn byte_size(&self) -> Option<u64> {
        self.filesize
            .filter(|&size| size > 0)
            .or(self.filesize_approx)
            .filter(|&size| size > 0)
    }

    /// Frame rate label (`30`, `29.97`), `None` when absent or zero
    pub fn fps_label(&self) -> Option<String> {
        let fps = self.fps.as_ref()?;
        if fps.as_f64().map_or(true, |v| v == 0.0) {
            return None;
        }
        Some(fps.to_string())
    }
}

/// What the user asked yt-dlp to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadRequest {
    /// Extract the best audio stream and convert it to MP3
    AudioMp3,
    /// Let yt-dlp pick the best video+audio pair
    BestQuality,
    /// A single format id, downloaded as-is
    Format(String),
    /// A video-only format id paired with the best audio stream
    VideoWithBestAudio(String),
}

impl DownloadRequest {
    /// The `-f` selector expression, if this request uses one
    pub fn selector(&self) -> Option<String> {
        match self {
            DownloadRequest::AudioMp3 => None,
            DownloadRequest::BestQuality => Some("bestvideo+bestaudio/best".to_string()),
            DownloadRequest::Format(id) => Some(id.clone()),
            DownloadRequest::VideoWithBestAudio(id) => Some(format!("{}+bestaudio/best", id)),
        }
    }
}

/// Exit state of a finished download subprocess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub success: bool,
    pub code: Option<i32>,
}
