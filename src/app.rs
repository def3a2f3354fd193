//! One interactive session: URL → formats → choice → download

use crate::extractor::models::{DownloadOutcome, DownloadRequest};
use crate::extractor::traits::MediaTool;
use crate::menu::dispatcher::{self, Choice};
use crate::menu::options::rank_formats;
use crate::menu::presenter;
use crate::utils::config::AppSettings;
use crate::utils::error::RustpickError;
use crate::utils::paths::resolve_destination;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How a session ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User typed `q`
    Quit,
    /// Menu token did not map to a download
    InvalidChoice,
    /// yt-dlp was invoked; its exit state is informational only
    Downloaded {
        request: DownloadRequest,
        outcome: DownloadOutcome,
    },
}

/// Drives the prompts over an input/output pair and a [`MediaTool`]
pub struct Session<'a, T: MediaTool + ?Sized, R, W> {
    tool: &'a T,
    settings: &'a AppSettings,
    input: R,
    output: W,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: MediaTool + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(tool: &'a T, settings: &'a AppSettings, input: R, output: W) -> Self {
        Self {
            tool,
            settings,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> Result<SessionOutcome> {
        presenter::render_banner(&mut self.output)?;
        let url = self.prompt("Paste the video URL: ")?;
        if url.is_empty() {
            return Err(RustpickError::InvalidUrl.into());
        }

        writeln!(self.output, "\nFetching video info...")?;
        self.output.flush()?;
        let info = self.tool.fetch_metadata(&url).await?;

        let options = rank_formats(&info.formats);
        debug!(
            "{} of {} formats kept after filtering",
            options.len(),
            info.formats.len()
        );
        if options.is_empty() {
            return Err(RustpickError::NoFormats.into());
        }

        presenter::render_options(
            &mut self.output,
            &info,
            &options,
            self.settings.display_limit,
        )?;
        presenter::render_special_options(&mut self.output)?;

        let choice = Choice::parse(&self.prompt("\nChoose an option (number or letter): ")?);
        if choice == Choice::Quit {
            writeln!(self.output, "Exiting...")?;
            return Ok(SessionOutcome::Quit);
        }

        let answer = self.prompt("Directory to save (Enter = current): ")?;
        let destination = resolve_destination(&answer, &self.settings.default_destination);

        let request = match dispatcher::resolve(choice, &options) {
            Some(request) => request,
            None => {
                writeln!(self.output, "Invalid option.")?;
                return Ok(SessionOutcome::InvalidChoice);
            }
        };

        info!("Dispatching {:?} to {}", request, self.tool.id());
        presenter::announce(&mut self.output, &request)?;
        self.output.flush()?;

        let outcome = self.tool.download(&url, &request, &destination).await?;
        Ok(SessionOutcome::Downloaded { request, outcome })
    }

    /// Print `label`, read one line, return it trimmed (EOF reads as empty)
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(RustpickError::from)?;
        Ok(line.trim().to_string())
    }
}
