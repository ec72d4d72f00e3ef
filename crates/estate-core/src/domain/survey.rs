//! Survey domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Survey {
    pub id: i64,
    pub building_id: i64,
    pub title: String,
    pub question: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

entity!(Survey, name = "Survey", table = "surveys", {
    building_id: i64 => "buildings",
    title: String,
    question: String,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
});

impl Survey {
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }
}
