//! Local object store for uploaded category images.
//!
//! Plays the role of the hosted `category-images` bucket: objects are files
//! under a root directory, addressed by a relative key, and exposed to
//! clients through a public base URL (the API serves the root directory
//! under `/media`).
//!
//! Removal is intentionally tolerant -- a missing object is not an error,
//! because category deletion must proceed best-effort even when some objects
//! were already cleaned up out of band.

use std::path::{Path, PathBuf};

/// Errors from the object store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key would escape the store root or is empty.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    /// Filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filesystem-backed object store.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl ObjectStore {
    /// Create a store rooted at `root`, serving objects under
    /// `public_base_url` (e.g. `/media`). The root directory is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The directory objects are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }

    /// Write an object, creating parent directories as needed.
    ///
    /// Returns the object's public URL.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let path = self.object_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(self.public_url(key))
    }

    /// Remove an object. A key that does not exist is treated as already
    /// removed and succeeds.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.object_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Whether an object exists. Used by tests and the health of cascade
    /// deletes; never consulted on the upload path.
    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.object_path(key)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    /// Resolve a key to an absolute path, rejecting traversal attempts.
    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        if key.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ObjectStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ObjectStore::new(dir.path(), "/media");
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_then_read_back() {
        let (_dir, store) = store();
        let url = store.put("3/100-a.jpg", b"payload").await.unwrap();
        assert_eq!(url, "/media/3/100-a.jpg");

        let on_disk = tokio::fs::read(store.root().join("3/100-a.jpg"))
            .await
            .unwrap();
        assert_eq!(on_disk, b"payload");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.put("3/100-a.jpg", b"payload").await.unwrap();

        store.remove("3/100-a.jpg").await.unwrap();
        assert!(!store.exists("3/100-a.jpg").await.unwrap());

        // Second removal of the same key must also succeed.
        store.remove("3/100-a.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_traversal_keys_rejected() {
        let (_dir, store) = store();
        for key in ["../evil", "/abs", "", "a/../b", "a//b", "./x"] {
            let err = store.put(key, b"x").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key: {key}");
        }
    }

    #[test]
    fn test_public_url_trims_trailing_slash() {
        let store = ObjectStore::new("/tmp/x", "/media/");
        assert_eq!(store.public_url("1/a.png"), "/media/1/a.png");
    }
}
