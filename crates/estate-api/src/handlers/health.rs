use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use estate_core::repositories::Filter;
use estate_core::services::EntityService;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Ready once the store answers a trivial lookup.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state
        .users
        .crud()
        .repository()
        .get(&Filter::eq("id", 0))
        .await?;
    Ok(StatusCode::OK)
}
