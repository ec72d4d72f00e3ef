use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::Building;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildingDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Address must be between 1 and 200 characters"))]
    pub address: String,

    #[validate(length(min = 1, max = 80, message = "City must be between 1 and 80 characters"))]
    pub city: String,

    #[validate(range(min = 1, max = 200, message = "Floor count must be between 1 and 200"))]
    pub floor_count: i64,

    #[validate(range(min = 1, message = "Manager must reference a user"))]
    pub manager_user_id: Option<i64>,
}

impl EntityDto for BuildingDto {
    type Entity = Building;

    fn apply_to(self, building: &mut Building) {
        building.name = self.name.trim().to_string();
        building.address = self.address.trim().to_string();
        building.city = self.city.trim().to_string();
        building.floor_count = self.floor_count;
        building.manager_user_id = self.manager_user_id;
    }
}
