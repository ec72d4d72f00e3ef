use std::sync::Arc;

use axum::extract::State;

use estate_core::domain::Notification;
use estate_core::services::NotificationService;

use crate::extract::Path;
use crate::response::ApiResponse;

pub async fn mark_read(
    State(service): State<Arc<NotificationService>>,
    Path(id): Path<i64>,
) -> ApiResponse<Notification> {
    service.mark_read(id).await.into()
}
