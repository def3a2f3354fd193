pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{DownloadOutcome, DownloadRequest, Format, VideoInfo};
pub use traits::MediaTool;
pub use ytdlp::YtDlpTool;
