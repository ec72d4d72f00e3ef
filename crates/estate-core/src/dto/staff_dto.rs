use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::{Staff, StaffDuty};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StaffDto {
    #[validate(range(min = 1, message = "User is required"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "Building is required"))]
    pub building_id: i64,

    pub duty: StaffDuty,

    #[validate(length(min = 1, max = 40, message = "Shift must be between 1 and 40 characters"))]
    pub shift: String,
}

impl EntityDto for StaffDto {
    type Entity = Staff;

    fn apply_to(self, staff: &mut Staff) {
        staff.user_id = self.user_id;
        staff.building_id = self.building_id;
        staff.duty = self.duty;
        staff.shift = self.shift.trim().to_string();
    }
}
