//! Notification domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity;

/// Announcement posted to every resident of a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Notification {
    pub id: i64,
    pub building_id: i64,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

entity!(Notification, name = "Notification", table = "notifications", {
    building_id: i64 => "buildings",
    title: String,
    message: String,
    created_at: DateTime<Utc>,
    is_read: bool,
});
