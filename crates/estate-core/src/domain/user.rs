//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{entity, text_enum};

/// Role a user plays in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Owner,
    #[default]
    Tenant,
    Security,
    Worker,
}

text_enum!(UserRole {
    Admin => "admin",
    Owner => "owner",
    Tenant => "tenant",
    Security => "security",
    Worker => "worker",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

entity!(User, name = "User", table = "users", unique = ["email"], {
    full_name: String,
    email: String,
    phone: String,
    role: UserRole,
    is_active: bool,
    created_at: DateTime<Utc>,
});

impl User {
    pub fn is_staff(&self) -> bool {
        matches!(self.role, UserRole::Security | UserRole::Worker)
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::repositories::{Entity, Value};

    #[test]
    fn test_role_text_round_trip() {
        assert_eq!(UserRole::Security.as_str(), "security");
        assert_eq!(UserRole::parse("WORKER"), Some(UserRole::Worker));
        assert_eq!(UserRole::parse("janitor"), None);
    }

    #[test]
    fn test_columns_follow_field_order() {
        let names: Vec<&str> = User::COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["full_name", "email", "phone", "role", "is_active", "created_at"]);
        assert!(User::COLUMNS.iter().all(|c| !c.nullable && c.references.is_none()));
    }

    #[test]
    fn test_values_rebuild_entity() {
        let user = User {
            id: 4,
            full_name: "Sari Wulandari".into(),
            email: "sari@example.com".into(),
            phone: "+628123456789".into(),
            role: UserRole::Owner,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        };
        assert_eq!(user.field("role"), Some(Value::Text("owner".into())));
        let rebuilt = User::from_values(user.id, user.values()).unwrap();
        assert_eq!(rebuilt, user);
    }
}
