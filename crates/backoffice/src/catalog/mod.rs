//! Item catalog: entities and DTOs, the repository contract with in-memory
//! and document-file stores, the DTO-facing service, and its HTTP router.

pub mod document;
pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use document::DocumentItemsRepository;
pub use domain::{CreateItemDto, Item, ItemDto, ItemId, UpdateItemDto};
pub use memory::InMemoryItemsRepository;
pub use repository::{ItemsRepository, RepositoryError};
pub use router::{item_location, items_router, ITEMS_PATH};
pub use service::{ItemService, ItemServiceError};
