//! Destination directory resolution
//!
//! A blank answer to the directory prompt falls back to the configured default.
//! A leading `~` is expanded to the home directory, and relative answers are
//! made absolute against the current working directory, so the output template
//! handed to yt-dlp never depends on its own cwd.

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolve the user's directory answer into an absolute destination.
pub fn resolve_destination(answer: &str, default: &Path) -> PathBuf {
    let answer = answer.trim();
    let chosen = if answer.is_empty() {
        expand_home(default)
    } else {
        expand_home(Path::new(answer))
    };

    match chosen.absolutize() {
        Ok(abs) => {
            debug!("Destination directory: {:?}", abs);
            abs.into_owned()
        }
        Err(e) => {
            warn!("Could not absolutize {:?}: {}", chosen, e);
            chosen.to_path_buf()
        }
    }
}

/// Replace a leading `~` component with the user's home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// yt-dlp output template placing `<title>.<ext>` inside `dir`.
pub fn output_template(dir: &Path) -> String {
    format!("{}/%(title)s.%(ext)s", dir.display())
}
