use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::Owner;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OwnerDto {
    #[validate(range(min = 1, message = "User is required"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "Apartment is required"))]
    pub apartment_id: i64,

    pub owned_since: NaiveDate,
}

impl EntityDto for OwnerDto {
    type Entity = Owner;

    fn apply_to(self, owner: &mut Owner) {
        owner.user_id = self.user_id;
        owner.apartment_id = self.apartment_id;
        owner.owned_since = self.owned_since;
    }
}
