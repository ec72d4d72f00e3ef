use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::{timestamp_now, User, UserRole};
use crate::validation::PHONE_RE;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserDto {
    #[validate(length(min = 2, max = 100, message = "Full name must be between 2 and 100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(regex(path = *PHONE_RE, message = "Phone must be 8 to 15 digits"))]
    pub phone: String,

    pub role: UserRole,

    #[serde(default = "crate::dto::default_true")]
    pub is_active: bool,
}

impl EntityDto for UserDto {
    type Entity = User;

    fn apply_to(self, user: &mut User) {
        user.full_name = self.full_name.trim().to_string();
        user.email = self.email.trim().to_lowercase();
        user.phone = self.phone;
        user.role = self.role;
        user.is_active = self.is_active;
    }

    fn into_new(self) -> User {
        let mut user = User {
            created_at: timestamp_now(),
            ..User::default()
        };
        self.apply_to(&mut user);
        user
    }
}
