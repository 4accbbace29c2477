//! JSON file fetcher.
//!
//! Treats `<root>/<key>.json` as the remote state for `key`. Useful for
//! state published to a mounted volume or a local sync directory.

use std::io;
use std::path::PathBuf;

use serde_json::Value;

use crate::core::{FetchError, SNAPSHOT_FILE_EXTENSION, StateFetcher};

/// Fetches JSON documents from a directory.
///
/// Snapshots are [`serde_json::Value`]s, so two fetches compare equal when
/// the documents are structurally equal, regardless of formatting or key
/// order in the file.
#[derive(Debug, Clone)]
pub struct JsonFileFetcher {
    root: PathBuf,
}

impl JsonFileFetcher {
    /// Create a fetcher reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the file holding the state for `key`.
    ///
    /// Keys are plain names; anything that could escape the root directory
    /// is rejected.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, FetchError> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
            || key.contains('\0');
        if invalid {
            return Err(FetchError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.{SNAPSHOT_FILE_EXTENSION}")))
    }
}

impl StateFetcher for JsonFileFetcher {
    type Snapshot = Value;
    type Error = FetchError;

    async fn fetch(&self, key: &str) -> Result<Value, FetchError> {
        let path = self.path_for(key)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path));
            }
            Err(source) => return Err(FetchError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode {
            path,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.json"), r#"{"resources": ["pods"]}"#).unwrap();

        let fetcher = JsonFileFetcher::new(dir.path());
        let snapshot = fetcher.fetch("app").await.unwrap();
        assert_eq!(snapshot, json!({"resources": ["pods"]}));
    }

    #[tokio::test]
    async fn test_formatting_does_not_matter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        let fetcher = JsonFileFetcher::new(dir.path());

        std::fs::write(&path, r#"{"a": 1, "b": [true, null]}"#).unwrap();
        let first = fetcher.fetch("app").await.unwrap();

        std::fs::write(&path, "{\n  \"b\": [true, null],\n  \"a\": 1\n}\n").unwrap();
        let second = fetcher.fetch("app").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = JsonFileFetcher::new(dir.path());

        let err = fetcher.fetch("absent").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(p) if p.ends_with("absent.json")));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.json"), "{not json").unwrap();

        let fetcher = JsonFileFetcher::new(dir.path());
        let err = fetcher.fetch("app").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn test_key_validation() {
        let fetcher = JsonFileFetcher::new("/state");

        assert_eq!(
            fetcher.path_for("exporter").unwrap(),
            PathBuf::from("/state/exporter.json")
        );
        for key in ["", ".", "..", "../etc/passwd", "a/b", "a\\b"] {
            assert!(
                matches!(fetcher.path_for(key), Err(FetchError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
