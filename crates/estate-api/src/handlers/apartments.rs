use std::sync::Arc;

use axum::extract::State;
use serde::Deserialize;

use estate_core::domain::Apartment;
use estate_core::services::ApartmentService;

use crate::extract::Query;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct VacantQuery {
    pub building_id: Option<i64>,
}

pub async fn vacant(
    State(service): State<Arc<ApartmentService>>,
    Query(query): Query<VacantQuery>,
) -> ApiResponse<Vec<Apartment>> {
    service.vacant(query.building_id).await.into()
}
