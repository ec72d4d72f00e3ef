//! Staff domain entity

use serde::{Deserialize, Serialize};

use crate::{entity, text_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffDuty {
    #[default]
    Security,
    Maintenance,
    Cleaning,
}

text_enum!(StaffDuty {
    Security => "security",
    Maintenance => "maintenance",
    Cleaning => "cleaning",
});

/// Security staff or worker assigned to a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Staff {
    pub id: i64,
    pub user_id: i64,
    pub building_id: i64,
    pub duty: StaffDuty,
    /// Free-form shift label, e.g. `night` or `06:00-14:00`.
    pub shift: String,
}

entity!(Staff, name = "Staff", table = "staff", {
    user_id: i64 => "users",
    building_id: i64 => "buildings",
    duty: StaffDuty,
    shift: String,
});
