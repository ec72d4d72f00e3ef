//! Building-scoped listings served by other entities' services.

use std::sync::Arc;

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use estate_core::domain::{Apartment, Meeting, Survey};
use estate_core::services::{ApartmentService, MeetingService, SurveyService};

use super::DateQuery;
use crate::extract::{Path, Query};
use crate::response::ApiResponse;

pub async fn apartments(
    State(service): State<Arc<ApartmentService>>,
    Path(building_id): Path<i64>,
) -> ApiResponse<Vec<Apartment>> {
    service.by_building(building_id).await.into()
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    /// RFC 3339; defaults to now.
    pub from: Option<DateTime<Utc>>,
}

pub async fn upcoming_meetings(
    State(service): State<Arc<MeetingService>>,
    Path(building_id): Path<i64>,
    Query(query): Query<UpcomingQuery>,
) -> ApiResponse<Vec<Meeting>> {
    let from = query.from.unwrap_or_else(Utc::now);
    service.upcoming(building_id, from).await.into()
}

pub async fn open_surveys(
    State(service): State<Arc<SurveyService>>,
    Path(building_id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> ApiResponse<Vec<Survey>> {
    service.open_on(building_id, query.or_today()).await.into()
}
