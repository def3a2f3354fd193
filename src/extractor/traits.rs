use crate::extractor::models::{DownloadOutcome, DownloadRequest, VideoInfo};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Boundary to the external download tool
///
/// The session only talks to this trait, so tests can swap the real yt-dlp
/// subprocess for a recording double.
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Returns a unique identifier for this tool (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Fetches single-item metadata (title, duration, channel, formats) for a URL
    async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo>;

    /// Runs the download into `destination`, streaming the tool's own progress
    async fn download(
        &self,
        url: &str,
        request: &DownloadRequest,
        destination: &Path,
    ) -> Result<DownloadOutcome>;
}
