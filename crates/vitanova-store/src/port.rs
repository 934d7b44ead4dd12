//! The storage port: load and save of one opaque serialized document.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StoreError;

/// Where the serialized document lives.
///
/// `load` returns `Ok(None)` when no document has ever been written;
/// decoding is the caller's concern. `save` must either write the whole
/// payload or leave the previous state intact.
pub trait StoragePort: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Option<Vec<u8>>, StoreError>> + Send;
    fn save(&self, bytes: &[u8]) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<T: StoragePort> StoragePort for &T {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load().await
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(bytes).await
    }
}

/// A single JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StoragePort for FileStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Write to a temp file then rename, so a failed write never leaves a
    /// truncated document behind.
    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StoreError::Write(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Write(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

/// An in-memory port for tests. Can be primed with contents and told to
/// fail saves.
#[derive(Default)]
pub struct MemoryStore {
    contents: Mutex<Option<Vec<u8>>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(bytes.into())),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail with a write error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        // Poisoning only matters if a test thread panicked mid-save;
        // recover with whatever was last written.
        self.contents.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }
}

impl StoragePort for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Write("simulated quota exceeded".to_string()));
        }
        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }
}
