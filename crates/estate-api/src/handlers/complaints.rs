use std::sync::Arc;

use axum::extract::State;

use estate_core::domain::Complaint;
use estate_core::services::ComplaintService;

use crate::extract::Path;
use crate::response::ApiResponse;

pub async fn start(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<i64>,
) -> ApiResponse<Complaint> {
    service.start_progress(id).await.into()
}

pub async fn resolve(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<i64>,
) -> ApiResponse<Complaint> {
    service.resolve(id).await.into()
}
