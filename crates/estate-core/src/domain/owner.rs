//! Owner domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity;

/// Ownership of one apartment by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Owner {
    pub id: i64,
    pub user_id: i64,
    pub apartment_id: i64,
    pub owned_since: NaiveDate,
}

entity!(Owner, name = "Owner", table = "owners", {
    user_id: i64 => "users",
    apartment_id: i64 => "apartments",
    owned_since: NaiveDate,
});
