use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::catalog::domain::{Item, ItemId};
use crate::catalog::memory::InMemoryItemsRepository;
use crate::catalog::repository::{ItemsRepository, RepositoryError};
use crate::catalog::router::items_router;
use crate::catalog::service::ItemService;

pub(crate) fn item_named(name: &str) -> Item {
    Item {
        id: ItemId::generate(),
        name: name.to_string(),
        description: Some(format!("{name} from the armory")),
        price: 42.0,
        created_date: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}

pub(super) fn memory_service(
    items: Vec<Item>,
) -> (
    ItemService<InMemoryItemsRepository>,
    Arc<InMemoryItemsRepository>,
) {
    let repository = Arc::new(InMemoryItemsRepository::with_items(items));
    (ItemService::new(repository.clone()), repository)
}

pub(super) fn memory_router(items: Vec<Item>) -> (axum::Router, Arc<InMemoryItemsRepository>) {
    let (service, repository) = memory_service(items);
    (items_router(Arc::new(service)), repository)
}

/// Repository double whose backend is permanently offline.
pub(super) struct UnavailableRepository;

#[async_trait]
impl ItemsRepository for UnavailableRepository {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn get_item(&self, _id: ItemId) -> Result<Option<Item>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn create_item(&self, _item: Item) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn update_item(&self, _item: Item) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn delete_item(&self, _id: ItemId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn check_health(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
