//! Apartment domain entity

use serde::{Deserialize, Serialize};

use crate::entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Apartment {
    pub id: i64,
    pub building_id: i64,
    /// Door number as shown on site, e.g. `A-12`.
    pub number: String,
    pub floor: i64,
    pub room_count: i64,
    pub area_sqm: f64,
    pub is_occupied: bool,
    /// Minor currency units charged every month.
    pub monthly_dues: i64,
}

entity!(Apartment, name = "Apartment", table = "apartments", {
    building_id: i64 => "buildings",
    number: String,
    floor: i64,
    room_count: i64,
    area_sqm: f64,
    is_occupied: bool,
    monthly_dues: i64,
});

impl Apartment {
    pub fn is_vacant(&self) -> bool {
        !self.is_occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Entity;

    #[test]
    fn test_building_foreign_key_declared() {
        let building = Apartment::COLUMNS.iter().find(|c| c.name == "building_id").unwrap();
        assert_eq!(building.references, Some("buildings"));
        assert!(!building.nullable);
    }
}
