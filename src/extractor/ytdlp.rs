//! yt-dlp wrapper for metadata extraction and downloads
//!
//! Every invocation carries `--js-runtimes` and `--remote-components`, which
//! yt-dlp needs for its challenge solver on current YouTube pages.

use crate::extractor::models::{DownloadOutcome, DownloadRequest, VideoInfo};
use crate::extractor::traits::MediaTool;
use crate::utils::config::AppSettings;
use crate::utils::error::RustpickError;
use crate::utils::paths::output_template;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, info};

/// yt-dlp backed implementation of [`MediaTool`]
pub struct YtDlpTool {
    ytdlp_path: PathBuf,
    settings: AppSettings,
}

impl YtDlpTool {
    /// Locate yt-dlp and confirm it answers `--version`
    pub async fn new(settings: AppSettings) -> Result<Self> {
        let ytdlp_path = match find_ytdlp(settings.ytdlp_path.as_deref()) {
            Some(path) => path,
            None => {
                debug!("yt-dlp not found anywhere");
                return Err(RustpickError::YtDlpNotFound.into());
            }
        };

        let version = check_ytdlp_installed(&ytdlp_path).await?;
        info!("Found yt-dlp {} at: {}", version, ytdlp_path.display());

        Ok(Self::with_path(ytdlp_path, settings))
    }

    /// Build a tool around a known binary without probing it
    pub fn with_path(ytdlp_path: PathBuf, settings: AppSettings) -> Self {
        Self {
            ytdlp_path,
            settings,
        }
    }
}

#[async_trait]
impl MediaTool for YtDlpTool {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(metadata_args(&self.settings, url))
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp extraction exited with {:?}", output.status.code());
            return Err(RustpickError::ExtractionError(error_msg.to_string()).into());
        }

        let video_info: VideoInfo =
            serde_json::from_slice(&output.stdout).map_err(RustpickError::from)?;
        debug!("Received {} formats", video_info.formats.len());

        Ok(video_info)
    }

    async fn download(
        &self,
        url: &str,
        request: &DownloadRequest,
        destination: &Path,
    ) -> Result<DownloadOutcome> {
        let args = download_args(&self.settings, url, request, destination);
        debug!("Running yt-dlp {:?}", args);

        // stdio is inherited so yt-dlp's progress lands on the terminal
        let status = AsyncCommand::new(&self.ytdlp_path)
            .args(&args)
            .status()
            .await?;

        let outcome = DownloadOutcome {
            success: status.success(),
            code: status.code(),
        };
        if outcome.success {
            info!("Download finished for {}", url);
        } else {
            debug!("yt-dlp download exited with {:?}", outcome.code);
        }

        Ok(outcome)
    }
}

// ============================================================
// Argument construction
// ============================================================

fn base_args(settings: &AppSettings) -> Vec<String> {
    vec![
        "--js-runtimes".to_string(),
        settings.js_runtime.clone(),
        "--remote-components".to_string(),
        settings.remote_components.clone(),
    ]
}

/// Arguments for a single-item JSON metadata dump
pub fn metadata_args(settings: &AppSettings, url: &str) -> Vec<String> {
    let mut args = base_args(settings);
    args.extend([
        "--dump-json".to_string(),
        "--no-playlist".to_string(),
        url.to_string(),
    ]);
    args
}

/// Arguments for downloading `request` into `destination`
pub fn download_args(
    settings: &AppSettings,
    url: &str,
    request: &DownloadRequest,
    destination: &Path,
) -> Vec<String> {
    let mut args = base_args(settings);
    args.push("--progress".to_string());
    args.push("--no-playlist".to_string());

    match request {
        DownloadRequest::AudioMp3 => {
            args.extend([
                "-x".to_string(),
                "--audio-format".to_string(),
                settings.audio_format.clone(),
                "--audio-quality".to_string(),
                settings.audio_quality.clone(),
            ]);
        }
        _ => {
            if let Some(selector) = request.selector() {
                args.push("-f".to_string());
                args.push(selector);
            }
            args.push("--merge-output-format".to_string());
            args.push(settings.merge_format.clone());
        }
    }

    args.push("-o".to_string());
    args.push(output_template(destination));
    args.push(url.to_string());
    args
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Run `<path> --version`; a zero exit means the tool is usable
pub async fn check_ytdlp_installed(path: &Path) -> Result<String> {
    let output = match AsyncCommand::new(path).arg("--version").output().await {
        Ok(output) => output,
        Err(e) => {
            debug!("Could not run {}: {}", path.display(), e);
            return Err(RustpickError::YtDlpNotFound.into());
        }
    };

    if !output.status.success() {
        debug!(
            "{} --version exited with {:?}",
            path.display(),
            output.status.code()
        );
        return Err(RustpickError::YtDlpNotFound.into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Find yt-dlp binary with priority:
/// 1. Explicit override
/// 2. System PATH
/// 3. Common installation paths
pub fn find_ytdlp(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!("Using configured yt-dlp: {:?}", path);
        return Some(path.to_path_buf());
    }

    if let Some(system) = find_in_path() {
        debug!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    debug!("yt-dlp not found in PATH or common locations");
    None
}

fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        "/usr/bin/yt-dlp",
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = match path_str.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            },
            None => PathBuf::from(path_str),
        };

        if expanded.is_file() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}
