//! A single JSON array document on disk.
//!
//! The whole collection is loaded on every access and rewritten on every
//! commit. Commits write a sibling `*.tmp` file and rename it over the
//! target so a crash mid-write never leaves a truncated document behind.

use crate::{Result as StoreResult, StoreError};

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::{Mutex, MutexGuard};

pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the collection. A missing file reads as empty.
    pub async fn read_all(&self) -> StoreResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Lock the file and load it for modification.
    ///
    /// The lock is held until the returned guard is committed or dropped.
    /// Dropping without `commit()` discards the in-memory changes.
    pub async fn lock(&self) -> StoreResult<JsonFileGuard<'_, T>> {
        let guard = self.lock.lock().await;
        let records = self.load().await?;

        Ok(JsonFileGuard {
            file: self,
            _guard: guard,
            records,
        })
    }

    async fn load(&self) -> StoreResult<Vec<T>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(&self.path, e))
    }

    async fn store(&self, records: &[T]) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let content = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::serialization(&self.path, e))?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        log::debug!("Wrote {} records to {}", records.len(), self.path.display());

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Exclusive, loaded view of a [`JsonFile`].
pub struct JsonFileGuard<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    file: &'a JsonFile<T>,
    _guard: MutexGuard<'a, ()>,
    records: Vec<T>,
}

impl<T> JsonFileGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Write the collection back to disk and release the lock.
    pub async fn commit(self) -> StoreResult<()> {
        self.file.store(&self.records).await
    }
}

impl<T> Deref for JsonFileGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<T> DerefMut for JsonFileGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.records
    }
}
