use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use inv_core::ports::{ItemStorePort, StoreError};
use inv_core::InventoryItem;

use super::columns::{decode_table, encode_table};

/// Item table persisted as one CSV file.
///
/// Each `save` rewrites the whole file. There is no lock: see
/// [`ItemStorePort`] for the single-writer assumption.
pub struct CsvItemStore {
    path: PathBuf,
}

impl CsvItemStore {
    /// Creates a store backed by the CSV file at `path`. The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new table is written to before it replaces the real one.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("inventory.csv"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(|e| {
                StoreError::Write(format!("create data dir failed: {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    /// Writes `content` next to the target, then renames it over the target.
    ///
    /// A crash before the rename leaves the previous table in place; a crash during
    /// the rename itself is not guarded against.
    async fn atomic_write(&self, content: &[u8]) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).await.map_err(|e| {
            StoreError::Write(format!("write temp table failed: {}: {e}", tmp_path.display()))
        })?;

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StoreError::Write(format!(
                "rename temp table to target failed: {} -> {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl ItemStorePort for CsvItemStore {
    async fn load(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "item table missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Unreadable(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };

        let items = decode_table(&bytes)?;
        debug!(path = %self.path.display(), rows = items.len(), "item table loaded");
        Ok(items)
    }

    async fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        let content = encode_table(items)?;
        self.atomic_write(&content).await?;
        debug!(path = %self.path.display(), rows = items.len(), "item table saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_is_a_sibling() {
        let store = CsvItemStore::new("/srv/inventory/items.csv");
        assert_eq!(store.tmp_path(), PathBuf::from("/srv/inventory/items.csv.tmp"));
    }
}
