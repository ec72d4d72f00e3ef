use std::sync::Arc;

use axum::extract::State;

use estate_core::domain::Payment;
use estate_core::services::{PaymentService, PenaltyQuote};

use super::DateQuery;
use crate::extract::{Path, Query};
use crate::response::ApiResponse;

pub async fn overdue(
    State(service): State<Arc<PaymentService>>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Vec<Payment>> {
    service.overdue(query.or_today()).await.into()
}

pub async fn penalty(
    State(service): State<Arc<PaymentService>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<PenaltyQuote> {
    service.delay_penalty(id, query.or_today()).await.into()
}

pub async fn pay(
    State(service): State<Arc<PaymentService>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Payment> {
    service.mark_paid(id, query.or_today()).await.into()
}
