use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::Apartment;
use crate::validation::APARTMENT_NUMBER_RE;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApartmentDto {
    #[validate(range(min = 1, message = "Building is required"))]
    pub building_id: i64,

    #[validate(regex(path = *APARTMENT_NUMBER_RE, message = "Number must look like 12 or A-12"))]
    pub number: String,

    #[validate(range(min = -5, max = 200, message = "Floor must be between -5 and 200"))]
    pub floor: i64,

    #[validate(range(min = 1, max = 20, message = "Room count must be between 1 and 20"))]
    pub room_count: i64,

    #[validate(range(min = 1.0, max = 10000.0, message = "Area must be between 1 and 10000 square metres"))]
    pub area_sqm: f64,

    #[serde(default)]
    pub is_occupied: bool,

    #[validate(range(min = 0, message = "Monthly dues cannot be negative"))]
    pub monthly_dues: i64,
}

impl EntityDto for ApartmentDto {
    type Entity = Apartment;

    fn apply_to(self, apartment: &mut Apartment) {
        apartment.building_id = self.building_id;
        apartment.number = self.number.to_uppercase();
        apartment.floor = self.floor;
        apartment.room_count = self.room_count;
        apartment.area_sqm = self.area_sqm;
        apartment.is_occupied = self.is_occupied;
        apartment.monthly_dues = self.monthly_dues;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::validation::validate_dto;

    fn dto() -> ApartmentDto {
        ApartmentDto {
            building_id: 1,
            number: "b-07".into(),
            floor: 2,
            room_count: 3,
            area_sqm: 72.5,
            is_occupied: false,
            monthly_dues: 350_000,
        }
    }

    #[test]
    fn test_valid_apartment() {
        assert!(validate_dto(&dto()).is_ok());
        assert_eq!(dto().into_new().number, "B-07");
    }

    #[test]
    fn test_range_rules() {
        let mut bad = dto();
        bad.room_count = 0;
        bad.area_sqm = 0.5;
        match validate_dto(&bad) {
            Err(DomainError::ValidationError(msg)) => {
                assert!(msg.contains("area_sqm: Area must be between 1 and 10000 square metres"));
                assert!(msg.contains("room_count: Room count must be between 1 and 20"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
