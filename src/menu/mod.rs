pub mod dispatcher;
pub mod options;
pub mod presenter;

pub use dispatcher::Choice;
pub use options::{rank_formats, DisplayOption};
