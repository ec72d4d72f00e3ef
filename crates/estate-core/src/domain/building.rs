//! Building domain entity

use serde::{Deserialize, Serialize};

use crate::entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Building {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub floor_count: i64,
    pub manager_user_id: Option<i64>,
}

entity!(Building, name = "Building", table = "buildings", {
    name: String,
    address: String,
    city: String,
    floor_count: i64,
    manager_user_id: Option<i64> => "users",
});
