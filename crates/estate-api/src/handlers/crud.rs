//! Generic CRUD handlers, instantiated once per entity service.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Router,
};

use estate_core::repositories::Filter;
use estate_core::services::EntityService;

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query-string pairs become an equality filter, e.g. `?building_id=3&is_occupied=false`.
pub async fn list<S: EntityService>(
    State(service): State<Arc<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiResponse<Vec<S::Entity>>, ApiError> {
    let filter = Filter::from_pairs::<S::Entity, _, _>(params)?;
    Ok(service.list(&filter).await.into())
}

pub async fn get_one<S: EntityService>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
) -> ApiResponse<S::Entity> {
    service.get(id).await.into()
}

pub async fn create<S: EntityService>(
    State(service): State<Arc<S>>,
    Json(dto): Json<S::Dto>,
) -> ApiResponse<S::Entity> {
    ApiResponse::created(service.create(dto).await)
}

pub async fn update<S: EntityService>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
    Json(dto): Json<S::Dto>,
) -> ApiResponse<S::Entity> {
    service.update(id, dto).await.into()
}

pub async fn delete<S: EntityService>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
) -> ApiResponse<()> {
    service.delete(id).await.into()
}

/// `GET /`, `POST /`, `GET /{id}`, `PUT /{id}` and `DELETE /{id}`.
pub fn routes<S>() -> Router<AppState>
where
    S: EntityService,
    Arc<S>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route("/{id}", get(get_one::<S>).put(update::<S>).delete(delete::<S>))
}
