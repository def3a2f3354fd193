//! Session-level tests driving the prompts against a recording tool double.

use anyhow::Result;
use async_trait::async_trait;
use rustpick::extractor::{DownloadOutcome, DownloadRequest, Format, MediaTool, VideoInfo};
use rustpick::utils::{AppSettings, RustpickError};
use rustpick::{Session, SessionOutcome};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serves canned metadata and records every download call
struct RecordingTool {
    metadata: std::result::Result<VideoInfo, String>,
    download_success: bool,
    downloads: Mutex<Vec<(String, DownloadRequest, PathBuf)>>,
    fetches: Mutex<Vec<String>>,
}

impl RecordingTool {
    fn new(info: VideoInfo) -> Self {
        Self {
            metadata: Ok(info),
            download_success: true,
            downloads: Mutex::new(Vec::new()),
            fetches: Mutex::new(Vec::new()),
        }
    }

    fn failing(stderr: &str) -> Self {
        Self {
            metadata: Err(stderr.to_string()),
            ..Self::new(VideoInfo::default())
        }
    }

    fn downloads(&self) -> Vec<(String, DownloadRequest, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaTool for RecordingTool {
    fn id(&self) -> &'static str {
        "recording"
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo> {
        self.fetches.lock().unwrap().push(url.to_string());
        match &self.metadata {
            Ok(info) => Ok(info.clone()),
            Err(stderr) => Err(RustpickError::ExtractionError(stderr.clone()).into()),
        }
    }

    async fn download(
        &self,
        url: &str,
        request: &DownloadRequest,
        destination: &Path,
    ) -> Result<DownloadOutcome> {
        self.downloads.lock().unwrap().push((
            url.to_string(),
            request.clone(),
            destination.to_path_buf(),
        ));
        Ok(DownloadOutcome {
            success: self.download_success,
            code: Some(if self.download_success { 0 } else { 1 }),
        })
    }
}

fn format(id: &str, resolution: &str, vcodec: &str, acodec: &str) -> Format {
    Format {
        format_id: id.to_string(),
        ext: "mp4".to_string(),
        resolution: Some(resolution.to_string()),
        vcodec: Some(vcodec.to_string()),
        acodec: Some(acodec.to_string()),
        ..Default::default()
    }
}

fn sample_video(formats: Vec<Format>) -> VideoInfo {
    VideoInfo {
        id: Some("vid123".to_string()),
        title: Some("Sample Video".to_string()),
        duration_string: Some("3:32".to_string()),
        channel: Some("Sample Channel".to_string()),
        formats,
        ..Default::default()
    }
}

async fn run_session(tool: &RecordingTool, input: &str) -> (Result<SessionOutcome>, String) {
    let settings = AppSettings::default();
    let mut output = Vec::new();
    let result = {
        let input = Cursor::new(input.to_string());
        let mut session = Session::new(tool, &settings, input, &mut output);
        session.run().await
    };
    (result, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn quit_never_downloads() {
    let tool = RecordingTool::new(sample_video(vec![format("18", "640x360", "avc1", "mp4a")]));
    let (result, out) = run_session(&tool, "https://youtu.be/x\nq\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::Quit);
    assert!(tool.downloads().is_empty());
    assert!(out.contains("Exiting..."));
    assert!(!out.contains("Directory to save"));
}

#[tokio::test]
async fn audio_letter_ignores_format_list() {
    let tool = RecordingTool::new(sample_video(vec![format("137", "1920x1080", "avc1", "none")]));
    let temp = TempDir::new().expect("temp dir");
    let input = format!("https://youtu.be/x\nA\n{}\n", temp.path().display());
    let (result, out) = run_session(&tool, &input).await;

    assert!(matches!(
        result.unwrap(),
        SessionOutcome::Downloaded { request: DownloadRequest::AudioMp3, .. }
    ));
    let downloads = tool.downloads();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].0, "https://youtu.be/x");
    assert_eq!(downloads[0].2, temp.path());
    assert!(out.contains("Downloading audio as MP3..."));
}

#[tokio::test]
async fn best_letter_requests_best_quality() {
    let tool = RecordingTool::new(sample_video(vec![format("18", "640x360", "avc1", "mp4a")]));
    let (result, _) = run_session(&tool, "https://youtu.be/x\nb\n\n").await;

    assert!(result.is_ok());
    assert_eq!(tool.downloads()[0].1, DownloadRequest::BestQuality);
}

#[tokio::test]
async fn out_of_range_index_is_invalid() {
    let tool = RecordingTool::new(sample_video(vec![
        format("18", "640x360", "avc1", "mp4a"),
        format("140", "audio only", "none", "mp4a"),
    ]));
    let (result, out) = run_session(&tool, "https://youtu.be/x\n5\n\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::InvalidChoice);
    assert!(tool.downloads().is_empty());
    assert!(out.contains("Invalid option."));
}

#[tokio::test]
async fn non_numeric_token_is_invalid() {
    let tool = RecordingTool::new(sample_video(vec![format("18", "640x360", "avc1", "mp4a")]));
    let (result, _) = run_session(&tool, "https://youtu.be/x\nzz\n\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::InvalidChoice);
    assert!(tool.downloads().is_empty());
}

#[tokio::test]
async fn video_only_format_is_paired_with_best_audio() {
    let tool = RecordingTool::new(sample_video(vec![format("137", "1920x1080", "avc1", "none")]));
    let (result, out) = run_session(&tool, "https://youtu.be/x\n1\n\n").await;

    assert!(result.is_ok());
    let downloads = tool.downloads();
    assert_eq!(downloads.len(), 1);
    assert_eq!(
        downloads[0].1,
        DownloadRequest::VideoWithBestAudio("137".to_string())
    );
    assert_eq!(downloads[0].1.selector().as_deref(), Some("137+bestaudio/best"));
    assert_eq!(downloads[0].2, std::env::current_dir().unwrap());
    assert!(out.contains("1920x1080"));
}

#[tokio::test]
async fn selection_follows_ranked_order() {
    let tool = RecordingTool::new(sample_video(vec![
        format("140", "audio only", "none", "mp4a"),
        format("18", "640x360", "avc1", "mp4a"),
        format("22", "1280x720", "avc1", "mp4a"),
    ]));
    let (_, out) = run_session(&tool, "https://youtu.be/x\n2\n\n").await;

    assert_eq!(tool.downloads()[0].1, DownloadRequest::Format("18".to_string()));
    assert!(out.contains("Title: Sample Video"));
    assert!(out.contains("Channel: Sample Channel"));
}

#[tokio::test]
async fn failed_download_is_not_an_error() {
    let mut tool = RecordingTool::new(sample_video(vec![format("18", "640x360", "avc1", "mp4a")]));
    tool.download_success = false;
    let (result, _) = run_session(&tool, "https://youtu.be/x\n1\n\n").await;

    match result.unwrap() {
        SessionOutcome::Downloaded { outcome, .. } => assert!(!outcome.success),
        other => panic!("expected a download, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_url_is_fatal_before_fetch() {
    let tool = RecordingTool::new(sample_video(vec![]));
    let (result, _) = run_session(&tool, "   \n").await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RustpickError>(),
        Some(RustpickError::InvalidUrl)
    ));
    assert!(tool.fetches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn streamless_format_list_is_fatal() {
    let tool = RecordingTool::new(sample_video(vec![format("sb0", "48x27", "none", "none")]));
    let (result, _) = run_session(&tool, "https://youtu.be/x\n").await;

    assert!(matches!(
        result.unwrap_err().downcast_ref::<RustpickError>(),
        Some(RustpickError::NoFormats)
    ));
}

#[tokio::test]
async fn metadata_failure_forwards_diagnostic() {
    let tool = RecordingTool::failing("ERROR: Unsupported URL: https://example.com");
    let (result, _) = run_session(&tool, "https://example.com\n").await;

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error fetching video info: ERROR: Unsupported URL: https://example.com"
    );
    assert!(tool.downloads().is_empty());
}
