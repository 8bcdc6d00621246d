//! Directory-backed blob store for uploaded images.
//!
//! Files are keyed by their generated filename. Cards reference them by that
//! name only; deleting a card never touches the store, so orphaned files and
//! dangling references are both expected.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::Utc;
use flashcard_core::upload::stored_filename;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// How many disambiguated names to try before giving up on an upload.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Writes uploads into a single flat directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the files live in. Also the root of the static file service.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Persist `data` under a fresh name derived from `original_name` and
    /// return that name.
    ///
    /// Files are opened with create-new semantics, so an existing upload is
    /// never overwritten: on a name clash the next disambiguated name is tried.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        let now = Utc::now();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let filename = stored_filename(now, original_name, attempt);
            let path = self.root.join(&filename);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };

            if let Err(e) = write_all(&mut file, data).await {
                let _ = tokio::fs::remove_file(&path).await;
                return Err(e);
            }
            return Ok(filename);
        }

        Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free filename for '{original_name}' after {MAX_NAME_ATTEMPTS} attempts"),
        ))
    }
}

async fn write_all(file: &mut tokio::fs::File, data: &[u8]) -> io::Result<()> {
    file.write_all(data).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_bytes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let name = store.save("cat photo.png", b"meow").await.unwrap();

        assert!(name.ends_with("_cat_photo.png"), "got {name}");
        let bytes = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(bytes, b"meow");
    }

    #[tokio::test]
    async fn same_name_twice_yields_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let first = store.save("a.png", b"one").await.unwrap();
        let second = store.save("a.png", b"two").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(tokio::fs::read(dir.path().join(&first)).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(dir.path().join(&second)).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("uploads"));

        store.ensure_dir().await.unwrap();

        assert!(store.root().is_dir());
    }
}
