//! Meeting domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity;

/// Residents' meeting held for one building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Meeting {
    pub id: i64,
    pub building_id: i64,
    pub title: String,
    pub agenda: String,
    pub scheduled_at: DateTime<Utc>,
    pub location: String,
}

entity!(Meeting, name = "Meeting", table = "meetings", {
    building_id: i64 => "buildings",
    title: String,
    agenda: String,
    scheduled_at: DateTime<Utc>,
    location: String,
});
