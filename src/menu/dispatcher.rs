//! Mapping of the user's menu token to a download request

use crate::extractor::models::DownloadRequest;
use crate::menu::options::DisplayOption;

/// Parsed menu token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    AudioOnly,
    Best,
    /// 1-based row number as typed
    Index(i64),
    Invalid,
}

impl Choice {
    /// Parse a raw token; whitespace and case are ignored
    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "q" => Choice::Quit,
            "a" => Choice::AudioOnly,
            "b" => Choice::Best,
            other => other.parse().map(Choice::Index).unwrap_or(Choice::Invalid),
        }
    }
}

/// Resolve a choice against the ranked list.
///
/// Indexes cover the whole ranked list, not only the rows that were printed.
/// Returns `None` for quit and for invalid or out-of-range selections.
pub fn resolve(choice: Choice, options: &[DisplayOption]) -> Option<DownloadRequest> {
    match choice {
        Choice::Quit | Choice::Invalid => None,
        Choice::AudioOnly => Some(DownloadRequest::AudioMp3),
        Choice::Best => Some(DownloadRequest::BestQuality),
        Choice::Index(n) => {
            let idx = usize::try_from(n.checked_sub(1)?).ok()?;
            let option = options.get(idx)?;
            if option.is_video_only() {
                Some(DownloadRequest::VideoWithBestAudio(option.format_id.clone()))
            } else {
                Some(DownloadRequest::Format(option.format_id.clone()))
            }
        }
    }
}
