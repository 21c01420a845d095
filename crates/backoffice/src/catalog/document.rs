use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs4::fs_std::FileExt;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::domain::{Item, ItemId};
use super::repository::{ItemsRepository, RepositoryError};

/// Durable store keeping every item as a JSON document in a single file.
///
/// Each call goes back to disk, so several processes pointed at the same file
/// observe each other's writes. Mutations hold an exclusive advisory lock on a
/// `<file>.lock` sibling for the whole read-modify-write, and the file is
/// replaced through a uniquely named staging file, so readers never see a
/// partially written collection.
#[derive(Debug)]
pub struct DocumentItemsRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DocumentItemsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Item>, RepositoryError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "document store missing, treating as empty");
                Ok(Vec::new())
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "document store read failed");
                Err(err.into())
            }
        }
    }

    /// Blocks until no other writer, in this process or another, holds the
    /// store. The lock is released when the returned handle drops.
    async fn lock_store(&self) -> Result<std::fs::File, RepositoryError> {
        self.ensure_parent().await?;
        let lock_path = self.sibling_path("lock");
        tokio::task::spawn_blocking(move || {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(false)
                .write(true)
                .open(&lock_path)?;
            file.lock_exclusive()?;
            Ok::<_, std::io::Error>(file)
        })
        .await
        .map_err(|err| RepositoryError::Unavailable(format!("store lock task failed: {err}")))?
        .map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "document store lock failed");
            RepositoryError::from(err)
        })
    }

    async fn ensure_parent(&self) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn save(&self, items: &[Item]) -> Result<(), RepositoryError> {
        let payload = serde_json::to_vec_pretty(items)?;
        let staging = self.sibling_path(&format!("{}.tmp", Uuid::new_v4()));
        fs::write(&staging, payload).await?;
        if let Err(err) = fs::rename(&staging, &self.path).await {
            warn!(path = %self.path.display(), error = %err, "document store write failed");
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }
        Ok(())
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "items.json".into());
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ItemsRepository for DocumentItemsRepository {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError> {
        self.load().await
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let items = self.load().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    async fn create_item(&self, item: Item) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let _store_lock = self.lock_store().await?;
        let mut items = self.load().await?;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(RepositoryError::Conflict);
        }
        items.push(item);
        self.save(&items).await
    }

    async fn update_item(&self, item: Item) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let _store_lock = self.lock_store().await?;
        let mut items = self.load().await?;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = item;
        self.save(&items).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let _store_lock = self.lock_store().await?;
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|existing| existing.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.save(&items).await
    }

    async fn check_health(&self) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !fs::try_exists(parent).await? {
                return Err(RepositoryError::Unavailable(format!(
                    "directory {} does not exist",
                    parent.display()
                )));
            }
        }
        self.load().await.map(|_| ())
    }
}
