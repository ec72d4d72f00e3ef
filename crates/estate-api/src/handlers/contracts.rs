use std::sync::Arc;

use axum::extract::State;

use estate_core::domain::Contract;
use estate_core::services::ContractService;

use super::DateQuery;
use crate::extract::{Path, Query};
use crate::response::ApiResponse;

pub async fn active(
    State(service): State<Arc<ContractService>>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Vec<Contract>> {
    service.active_on(query.or_today()).await.into()
}

pub async fn terminate(
    State(service): State<Arc<ContractService>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Contract> {
    service.terminate(id, query.or_today()).await.into()
}
