use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{validate_fields, CreateItemDto, Item, ItemDto, ItemId, UpdateItemDto};
use super::repository::{ItemsRepository, RepositoryError};

/// Application service translating between DTOs and the backing repository.
pub struct ItemService<R: ?Sized> {
    repository: Arc<R>,
}

#[derive(Debug, thiserror::Error)]
pub enum ItemServiceError {
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("invalid item: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl<R> ItemService<R>
where
    R: ItemsRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every item, keeping only names that contain `name_filter`
    /// (case-insensitive) when the filter is not blank.
    pub async fn list(&self, name_filter: Option<&str>) -> Result<Vec<ItemDto>, ItemServiceError> {
        let items = self.repository.list_items().await?;
        let dtos = items.into_iter().map(ItemDto::from);

        let needle = name_filter
            .filter(|filter| !filter.trim().is_empty())
            .map(str::to_lowercase);

        Ok(match needle {
            Some(needle) => dtos
                .filter(|dto| dto.name.to_lowercase().contains(&needle))
                .collect(),
            None => dtos.collect(),
        })
    }

    pub async fn get(&self, id: ItemId) -> Result<ItemDto, ItemServiceError> {
        self.repository
            .get_item(id)
            .await?
            .map(ItemDto::from)
            .ok_or(ItemServiceError::NotFound(id))
    }

    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemDto, ItemServiceError> {
        validate_fields(&dto.name, dto.price).map_err(ItemServiceError::Validation)?;

        let item = Item::from_create(dto, ItemId::generate(), Utc::now());
        let created = item.to_dto();
        self.repository.create_item(item).await?;

        info!(item_id = %created.id, name = %created.name, "item created");
        Ok(created)
    }

    pub async fn update(&self, id: ItemId, dto: UpdateItemDto) -> Result<(), ItemServiceError> {
        validate_fields(&dto.name, dto.price).map_err(ItemServiceError::Validation)?;

        let mut existing = self
            .repository
            .get_item(id)
            .await?
            .ok_or(ItemServiceError::NotFound(id))?;
        existing.apply_update(dto);

        self.repository
            .update_item(existing)
            .await
            .map_err(|err| not_found_or(id, err))?;

        info!(item_id = %id, "item updated");
        Ok(())
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), ItemServiceError> {
        if self.repository.get_item(id).await?.is_none() {
            return Err(ItemServiceError::NotFound(id));
        }

        self.repository
            .delete_item(id)
            .await
            .map_err(|err| not_found_or(id, err))?;

        info!(item_id = %id, "item deleted");
        Ok(())
    }
}

// The record can vanish between the lookup and the write.
fn not_found_or(id: ItemId, err: RepositoryError) -> ItemServiceError {
    match err {
        RepositoryError::NotFound => ItemServiceError::NotFound(id),
        other => ItemServiceError::Repository(other),
    }
}
