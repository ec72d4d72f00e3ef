use std::sync::Arc;

use axum::extract::State;
use serde::Deserialize;

use estate_core::domain::User;
use estate_core::services::UserService;

use crate::extract::{Path, Query};
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn by_email(
    State(service): State<Arc<UserService>>,
    Query(query): Query<EmailQuery>,
) -> ApiResponse<User> {
    service.by_email(&query.email).await.into()
}

pub async fn deactivate(
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> ApiResponse<User> {
    service.deactivate(id).await.into()
}
