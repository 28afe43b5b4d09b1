//! spatial-io: the JSON document format and storage for spatial scenes.
//!
//! This crate owns the wire schema, its normalization into the typed
//! [`SceneDocument`](spatial_core::SceneDocument) model, serialization back
//! out, and the conventional on-disk locations for import and export.
//!
//! # Quick Start
//!
//! ```
//! use spatial_io::{read_document, write_document, sample_document};
//!
//! let outcome = sample_document().unwrap();
//! let json = write_document(&outcome.document).unwrap();
//! let again = read_document(json.as_bytes()).unwrap();
//! assert_eq!(outcome.document, again.document);
//! ```
//!
//! A document missing its `objects` array is rejected wholesale; every
//! per-object problem instead degrades to a documented default and is
//! reported as a [`Warning`](spatial_core::Warning) on the parse outcome.

pub mod error;
pub mod format;
pub mod sample;

pub use error::{IoError, Result};
pub use format::{ParseOutcome, RawDocument};
pub use sample::{sample_document, SAMPLE_SCENE_JSON};

use std::path::Path;

use log::debug;
use spatial_core::SceneDocument;

/// Conventional relative path a host loads scene documents from.
pub const DEFAULT_IMPORT_PATH: &str = "assets/spatial_scene.json";

/// Conventional relative path a host saves exported documents to.
pub const DEFAULT_EXPORT_PATH: &str = "assets/exported_scene.json";

/// Parse a scene document from raw bytes.
pub fn read_document(data: &[u8]) -> Result<ParseOutcome> {
    let raw: RawDocument = serde_json::from_slice(data)?;
    let outcome = format::normalize(raw)?;
    debug!(
        "parsed document '{}' with {} objects",
        outcome.document.info.name,
        outcome.document.object_count()
    );
    Ok(outcome)
}

/// Serialize a scene document to pretty-printed JSON.
///
/// The returned string is the narrow interface for any outbound transfer:
/// a host can write it to disk, hand it to a clipboard, or send it over a
/// socket.
pub fn write_document(document: &SceneDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(&format::denormalize(document))?)
}

/// Load and parse a document file.
pub fn load_document(path: impl AsRef<Path>) -> Result<ParseOutcome> {
    let data = std::fs::read(path.as_ref())?;
    read_document(&data)
}

/// Serialize a document and write it to a file, creating parent
/// directories as needed.
pub fn save_document(path: impl AsRef<Path>, document: &SceneDocument) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = write_document(document)?;
    std::fs::write(path, json)?;
    debug!("saved document to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rejects_non_json() {
        assert!(matches!(
            read_document(b"not json at all"),
            Err(IoError::Json(_))
        ));
    }

    #[test]
    fn test_read_rejects_missing_objects() {
        assert!(matches!(
            read_document(br#"{"scene": {"name": "x"}}"#),
            Err(IoError::MissingObjects)
        ));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let outcome = sample_document().unwrap();
        let json = write_document(&outcome.document).unwrap();
        let again = read_document(json.as_bytes()).unwrap();
        assert_eq!(outcome.document, again.document);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join("spatial-io-test");
        let path = dir.join("exported_scene.json");
        let outcome = sample_document().unwrap();

        save_document(&path, &outcome.document).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.document, outcome.document);

        std::fs::remove_file(&path).ok();
    }
}
