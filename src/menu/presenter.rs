//! Text rendering of the video summary and format table

use crate::extractor::models::{DownloadRequest, VideoInfo};
use crate::menu::options::DisplayOption;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Video Downloader ===\n")
}

/// Print title/duration/channel and up to `limit` ranked options
pub fn render_options<W: Write>(
    out: &mut W,
    info: &VideoInfo,
    options: &[DisplayOption],
    limit: usize,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "Title: {}", info.title.as_deref().unwrap_or("N/A"))?;
    writeln!(
        out,
        "Duration: {}",
        info.duration_string.as_deref().unwrap_or("N/A")
    )?;
    writeln!(out, "Channel: {}", info.channel.as_deref().unwrap_or("N/A"))?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\nDownload options:\n")?;
    writeln!(
        out,
        "{:<3} {:<12} {:<6} {:<12} {}",
        "#", "Resolution", "Format", "Size", "Type"
    )?;
    writeln!(out, "{}", thin)?;

    for (i, option) in options.iter().take(limit).enumerate() {
        writeln!(
            out,
            "{:<3} {:<12} {:<6} {:<12} {}",
            i + 1,
            option.resolution_label(),
            option.ext,
            option.size,
            option.type_label()
        )?;
    }

    writeln!(out, "{}", thin)
}

pub fn render_special_options<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSpecial options:")?;
    writeln!(out, "a  - Download audio only (MP3)")?;
    writeln!(out, "b  - Best available quality")?;
    writeln!(out, "q  - Quit")
}

/// Line printed right before yt-dlp takes over the terminal
pub fn announce<W: Write>(out: &mut W, request: &DownloadRequest) -> io::Result<()> {
    let line = match request {
        DownloadRequest::AudioMp3 => "Downloading audio as MP3...",
        DownloadRequest::BestQuality => "Downloading best quality...",
        DownloadRequest::VideoWithBestAudio(_) => {
            "This format is video only. Downloading with separate audio and merging..."
        }
        DownloadRequest::Format(_) => "Starting download...",
    };
    writeln!(out, "\n{}\n", line)
}
