//! Tenant domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity;

/// A user living in an apartment, from move-in to (optional) move-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Tenant {
    pub id: i64,
    pub user_id: i64,
    pub apartment_id: i64,
    pub moved_in_on: NaiveDate,
    pub moved_out_on: Option<NaiveDate>,
}

entity!(Tenant, name = "Tenant", table = "tenants", {
    user_id: i64 => "users",
    apartment_id: i64 => "apartments",
    moved_in_on: NaiveDate,
    moved_out_on: Option<NaiveDate>,
});

impl Tenant {
    pub fn is_resident(&self) -> bool {
        self.moved_out_on.is_none()
    }
}
