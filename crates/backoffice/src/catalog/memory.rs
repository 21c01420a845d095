use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::domain::{Item, ItemId};
use super::repository::{ItemsRepository, RepositoryError};

/// Volatile store backed by a vector, looked up by linear scan.
#[derive(Debug, Default)]
pub struct InMemoryItemsRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Store pre-populated with the demo inventory.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let demo = [("Potion", 10.0), ("Iron Sword", 22.0), ("Bronze Shield", 14.0)]
            .into_iter()
            .map(|(name, price)| Item {
                id: ItemId::generate(),
                name: name.to_string(),
                description: None,
                price,
                created_date: now,
            })
            .collect();
        Self::with_items(demo)
    }
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let guard = self.items.read().await;
        Ok(guard.iter().find(|item| item.id == id).cloned())
    }

    async fn create_item(&self, item: Item) -> Result<(), RepositoryError> {
        let mut guard = self.items.write().await;
        if guard.iter().any(|existing| existing.id == item.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(item);
        Ok(())
    }

    async fn update_item(&self, item: Item) -> Result<(), RepositoryError> {
        let mut guard = self.items.write().await;
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = item;
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError> {
        let mut guard = self.items.write().await;
        let index = guard
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(RepositoryError::NotFound)?;
        guard.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::common::item_named;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repository = InMemoryItemsRepository::new();
        assert!(repository.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_store_holds_demo_inventory() {
        let repository = InMemoryItemsRepository::seeded();
        let names: Vec<String> = repository
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Potion", "Iron Sword", "Bronze Shield"]);
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_item() {
        let repository = InMemoryItemsRepository::new();
        let item = item_named("Axe");

        repository.create_item(item.clone()).await.unwrap();

        let stored = repository.get_item(item.id).await.unwrap();
        assert_eq!(stored, Some(item));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let repository = InMemoryItemsRepository::new();
        let item = item_named("Axe");
        repository.create_item(item.clone()).await.unwrap();

        let err = repository.create_item(item).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repository = InMemoryItemsRepository::new();
        for name in ["Potion", "Axe", "BigAxe"] {
            repository.create_item(item_named(name)).await.unwrap();
        }

        let names: Vec<String> = repository
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Potion", "Axe", "BigAxe"]);
    }

    #[tokio::test]
    async fn update_replaces_matching_record() {
        let repository = InMemoryItemsRepository::new();
        let mut item = item_named("Axe");
        repository.create_item(item.clone()).await.unwrap();

        item.price = 99.0;
        repository.update_item(item.clone()).await.unwrap();

        assert_eq!(repository.get_item(item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let repository = InMemoryItemsRepository::seeded();
        let err = repository.update_item(item_named("Ghost")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(repository.list_items().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repository = InMemoryItemsRepository::new();
        let item = item_named("Axe");
        repository.create_item(item.clone()).await.unwrap();

        repository.delete_item(item.id).await.unwrap();

        assert!(repository.get_item(item.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let repository = InMemoryItemsRepository::new();
        let err = repository
            .delete_item(ItemId::generate())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
