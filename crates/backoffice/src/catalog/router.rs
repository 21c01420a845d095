use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{CreateItemDto, ItemId, UpdateItemDto};
use super::repository::{ItemsRepository, RepositoryError};
use super::service::{ItemService, ItemServiceError};

pub const ITEMS_PATH: &str = "/items";

/// Router builder exposing the item CRUD endpoints.
pub fn items_router<R>(service: Arc<ItemService<R>>) -> Router
where
    R: ItemsRepository + ?Sized + 'static,
{
    Router::new()
        .route(
            ITEMS_PATH,
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/items/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

/// Where a created item can be fetched from.
pub fn item_location(id: ItemId) -> String {
    format!("{ITEMS_PATH}/{id}")
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListItemsQuery {
    #[serde(rename = "nameToMatch")]
    name_to_match: Option<String>,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ItemService<R>>>,
    Query(query): Query<ListItemsQuery>,
) -> Response
where
    R: ItemsRepository + ?Sized + 'static,
{
    match service.list(query.name_to_match.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: ItemsRepository + ?Sized + 'static,
{
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.get(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ItemService<R>>>,
    Json(dto): Json<CreateItemDto>,
) -> Response
where
    R: ItemsRepository + ?Sized + 'static,
{
    match service.create(dto).await {
        Ok(item) => {
            let location = item_location(item.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(item),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
    Json(dto): Json<UpdateItemDto>,
) -> Response
where
    R: ItemsRepository + ?Sized + 'static,
{
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.update(id, dto).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: ItemsRepository + ?Sized + 'static,
{
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn parse_id(raw: &str) -> Result<ItemId, Response> {
    raw.parse::<ItemId>().map_err(|err| {
        let payload = json!({
            "error": format!("'{raw}' is not a valid item id: {err}"),
        });
        (StatusCode::BAD_REQUEST, Json(payload)).into_response()
    })
}

fn error_response(err: ItemServiceError) -> Response {
    let status = match &err {
        ItemServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ItemServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ItemServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ItemServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ItemServiceError::Repository(other) => {
            warn!(error = %other, "item store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}
