//! # File Store
//!
//! Directory holding uploaded PDFs under their client-supplied names.
//!
//! - Created recursively at startup if missing
//! - Same name overwrites the previous file, no collision handling
//! - Whole-file write, no fsync or temp-then-rename, a crash mid-write can
//!   leave a truncated file
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{error::AppError, utils::is_plain_filename};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, filename: &str) -> Result<PathBuf, AppError> {
        if !is_plain_filename(filename) {
            return Err(AppError::InvalidFilename(filename.to_string()));
        }

        Ok(self.root.join(filename))
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.path_for(filename)?;
        fs::write(&path, bytes).await?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("static").join("uploads");

        let store = FileStore::open(&root).unwrap();

        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.save("report.pdf", b"first").await.unwrap();
        let path = store.save("report.pdf", b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path().join("uploads")).unwrap();

        let result = store.save("../evil.pdf", b"x").await;

        assert!(matches!(result, Err(AppError::InvalidFilename(_))));
        assert!(!tmp.path().join("evil.pdf").exists());
    }
}
