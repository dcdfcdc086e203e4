//! Frame documents as written by a dashboard host.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use statusboard_types::Frame;

/// Errors loading a frame document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be read.
    #[error("Read error: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid frame document.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Accepted document layouts: a bare list of frames, or a panel-data object
/// carrying them under `series`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FrameDocument {
    Frames(Vec<Frame>),
    Panel { series: Vec<Frame> },
}

impl From<FrameDocument> for Vec<Frame> {
    fn from(doc: FrameDocument) -> Self {
        match doc {
            FrameDocument::Frames(frames) => frames,
            FrameDocument::Panel { series } => series,
        }
    }
}

/// Parse a frame document from a JSON string.
pub fn parse_frame_document(content: &str) -> Result<Vec<Frame>, SourceError> {
    let doc: FrameDocument = serde_json::from_str(content)?;
    Ok(doc.into())
}

/// Load a frame document from a JSON file.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_frame_document(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_list() {
        let json = r#"[
            {
                "fields": [
                    { "name": "Time", "type": "time", "values": [1, 2] },
                    { "name": "Value", "type": "number", "values": [1, 0] }
                ]
            }
        ]"#;
        let frames = parse_frame_document(json).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 2);
    }

    #[test]
    fn test_parse_panel_series() {
        let json = r#"{ "series": [ { "name": "a", "fields": [] }, { "name": "b" } ] }"#;
        let frames = parse_frame_document(json).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        let err = parse_frame_document(r#"{ "frames": 3 }"#).unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_frames(Path::new("/nonexistent/frames.json")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().starts_with("Read error"));
    }
}
