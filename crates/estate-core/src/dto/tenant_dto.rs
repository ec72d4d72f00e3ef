use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::EntityDto;
use crate::domain::Tenant;
use crate::validation::rule_violation;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_stay"))]
pub struct TenantDto {
    #[validate(range(min = 1, message = "User is required"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "Apartment is required"))]
    pub apartment_id: i64,

    pub moved_in_on: NaiveDate,

    pub moved_out_on: Option<NaiveDate>,
}

fn validate_stay(dto: &TenantDto) -> Result<(), ValidationError> {
    match dto.moved_out_on {
        Some(out) if out < dto.moved_in_on => Err(rule_violation(
            "moved_out_before_moved_in",
            "Move-out date cannot be before move-in date",
        )),
        _ => Ok(()),
    }
}

impl EntityDto for TenantDto {
    type Entity = Tenant;

    fn apply_to(self, tenant: &mut Tenant) {
        tenant.user_id = self.user_id;
        tenant.apartment_id = self.apartment_id;
        tenant.moved_in_on = self.moved_in_on;
        tenant.moved_out_on = self.moved_out_on;
    }
}
