//! Filtering and ranking of raw formats into menu entries

use crate::extractor::models::Format;
use std::cmp::Reverse;

/// A format as shown in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOption {
    pub format_id: String,
    pub ext: String,
    pub resolution: String,
    /// Frame rate without unit, `None` when unknown
    pub fps: Option<String>,
    pub has_video: bool,
    pub has_audio: bool,
    /// `"10.0 MB"` or `"N/A"`
    pub size: String,
    pub vcodec: Option<String>,
    /// Height parsed from `WIDTHxHEIGHT`, 0 when unavailable
    pub height: u32,
}

impl DisplayOption {
    /// Project a raw format; formats with neither stream yield `None`
    pub fn from_format(format: &Format) -> Option<Self> {
        let has_video = format.has_video();
        let has_audio = format.has_audio();
        if !has_video && !has_audio {
            return None;
        }

        let resolution = format.resolution.clone().unwrap_or_default();
        Some(Self {
            format_id: format.format_id.clone(),
            ext: format.ext.clone(),
            height: parse_height(&resolution),
            resolution,
            fps: format.fps_label(),
            has_video,
            has_audio,
            size: format_size(format.byte_size()),
            vcodec: format.vcodec.clone(),
        })
    }

    pub fn type_label(&self) -> &'static str {
        match (self.has_video, self.has_audio) {
            (true, true) => "Video + Audio",
            (true, false) => "Video",
            _ => "Audio",
        }
    }

    /// Resolution with an optional ` (<fps> fps)` suffix
    pub fn resolution_label(&self) -> String {
        match &self.fps {
            Some(fps) => format!("{} ({} fps)", self.resolution, fps),
            None => self.resolution.clone(),
        }
    }

    /// Video stream that needs a separate audio stream merged in
    pub fn is_video_only(&self) -> bool {
        self.has_video && !self.has_audio
    }
}

/// Drop stream-less formats and rank the rest.
///
/// Video-bearing entries come first, tallest first within each group. The sort
/// is stable, so ties keep yt-dlp's order.
pub fn rank_formats(formats: &[Format]) -> Vec<DisplayOption> {
    let mut options: Vec<DisplayOption> =
        formats.iter().filter_map(DisplayOption::from_format).collect();
    options.sort_by_key(|option| (!option.has_video, Reverse(option.height)));
    options
}

/// Megabytes with one decimal, or `"N/A"` for unknown/zero sizes
pub fn format_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) if bytes > 0 => format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
        _ => "N/A".to_string(),
    }
}

/// Height from a `WIDTHxHEIGHT` resolution string
pub fn parse_height(resolution: &str) -> u32 {
    resolution
        .split('x')
        .nth(1)
        .and_then(|height| height.trim().parse().ok())
        .unwrap_or(0)
}
