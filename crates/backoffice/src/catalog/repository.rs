use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::domain::{Item, ItemId};

/// Storage abstraction so the item service can be exercised in isolation.
///
/// Implementations hand out clones; the canonical collection never leaves the
/// repository. Update and delete report [`RepositoryError::NotFound`] for ids
/// the store does not hold.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;
    async fn create_item(&self, item: Item) -> Result<(), RepositoryError>;
    async fn update_item(&self, item: Item) -> Result<(), RepositoryError>;
    async fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError>;

    /// Connectivity probe used by readiness checks.
    async fn check_health(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("document store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("document store holds malformed data: {0}")]
    Codec(#[from] serde_json::Error),
}
