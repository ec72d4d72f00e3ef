//! HTTP handlers

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

pub mod crud;
pub mod health;
pub mod users;
pub mod buildings;
pub mod apartments;
pub mod tenants;
pub mod contracts;
pub mod payments;
pub mod complaints;
pub mod notifications;

/// `?date=YYYY-MM-DD`, today (UTC) when absent.
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

impl DateQuery {
    pub fn or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
