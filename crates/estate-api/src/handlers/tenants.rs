use std::sync::Arc;

use axum::extract::State;

use estate_core::domain::Tenant;
use estate_core::services::TenantService;

use super::DateQuery;
use crate::extract::{Path, Query};
use crate::response::ApiResponse;

pub async fn move_out(
    State(service): State<Arc<TenantService>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Tenant> {
    service.move_out(id, query.or_today()).await.into()
}
