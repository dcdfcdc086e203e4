//! Data source abstraction for receiving frames.
//!
//! The dashboard host owns querying; a source only hands over whatever
//! frames the host produced most recently.

mod channel;
mod document;
mod file;

pub use channel::ChannelSource;
pub use document::{load_frames, parse_frame_document, SourceError};
pub use file::FileSource;

use std::fmt::Debug;

use statusboard_types::Frame;

/// Trait for receiving frames from various sources.
///
/// # Example
///
/// ```
/// use statusboard::{DataSource, FileSource};
///
/// let mut source = FileSource::new("frames.json");
/// if let Some(frames) = source.poll() {
///     println!("Got {} frames", frames.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest frames.
    ///
    /// Returns `Some(frames)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<Vec<Frame>>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Returns the error message if the last poll failed.
    fn error(&self) -> Option<&str>;
}
