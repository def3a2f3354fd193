//! Rustpick - interactive yt-dlp format picker
//!
//! Lists the format variants of a video URL, lets the user pick one by number
//! (or `a`/`b`/`q`), and hands the download back to yt-dlp.

use clap::Parser;
use rustpick::utils::{AppSettings, RustpickError};
use rustpick::{Session, SessionOutcome, YtDlpTool};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Pick a yt-dlp format interactively and download it
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the yt-dlp binary (default: search PATH and common locations)
    #[arg(long = "ytdlp", value_name = "PATH")]
    ytdlp: Option<PathBuf>,

    /// JavaScript runtime passed to --js-runtimes
    #[arg(long)]
    js_runtime: Option<String>,

    /// Component bundle passed to --remote-components
    #[arg(long)]
    remote_components: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> AppSettings {
        let mut settings = AppSettings {
            ytdlp_path: self.ytdlp.clone(),
            ..AppSettings::default()
        };
        if let Some(runtime) = &self.js_runtime {
            settings.js_runtime = runtime.clone();
        }
        if let Some(components) = &self.remote_components {
            settings.remote_components = components.clone();
        }
        settings
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let settings = args.settings();

    let tool = match YtDlpTool::new(settings.clone()).await {
        Ok(tool) => tool,
        Err(e) => return fail(e),
    };

    let stdin = io::stdin();
    let mut session = Session::new(&tool, &settings, stdin.lock(), io::stdout());
    match session.run().await {
        Ok(SessionOutcome::Downloaded { outcome, .. }) => {
            info!("yt-dlp finished with {:?}", outcome.code);
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: anyhow::Error) -> ExitCode {
    match e.downcast_ref::<RustpickError>() {
        Some(known) => println!("{}", known),
        None => {
            error!("Unexpected failure: {:?}", e);
            println!("Error: {}", e);
        }
    }
    ExitCode::FAILURE
}
