//! File-based data source.
//!
//! Polls a JSON frame document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use statusboard_types::Frame;

use super::{load_frames, DataSource};

/// A data source that reads frames from a JSON file.
///
/// The host (or an export script) overwrites the file with each query
/// result. The source tracks the file's modification time and only returns
/// new frames when the file has been updated.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<Vec<Frame>> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, keep what we have
            (Some(last), Some(current)) => current > last,
        };

        if !file_changed {
            return None;
        }

        match load_frames(&self.path) {
            Ok(frames) => {
                self.last_error = None;
                self.last_modified = current_modified;
                Some(frames)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[{
            "name": "probe_success",
            "fields": [
                { "name": "Time", "type": "time", "values": [1700000000000] },
                {
                    "name": "Value",
                    "type": "number",
                    "values": [1],
                    "labels": { "instance": "https://example.com" }
                }
            ]
        }]"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/frames.json");
        assert_eq!(source.path(), Path::new("/tmp/frames.json"));
        assert_eq!(source.description(), "file: /tmp/frames.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll should return data
        let frames = source.poll().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].name.as_deref(), Some("probe_success"));

        // Second poll without file change should return None
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_detects_changes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());
        let _ = source.poll();

        std::thread::sleep(std::time::Duration::from_millis(10));
        file.as_file().set_len(0).unwrap();
        file.rewind().unwrap();
        writeln!(file, r#"{{ "series": [ {{ "name": "updated" }} ] }}"#).unwrap();
        file.flush().unwrap();

        // Low mtime resolution on some filesystems can hide the change
        if let Some(frames) = source.poll() {
            assert_eq!(frames[0].name.as_deref(), Some("updated"));
        }
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/frames.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }
}
