use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::EntityDto;
use crate::domain::Contract;
use crate::validation::rule_violation;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_term"))]
pub struct ContractDto {
    #[validate(range(min = 1, message = "Apartment is required"))]
    pub apartment_id: i64,

    #[validate(range(min = 1, message = "Owner is required"))]
    pub owner_id: i64,

    #[validate(range(min = 1, message = "Tenant is required"))]
    pub tenant_id: i64,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(range(min = 1, message = "Monthly rent must be positive"))]
    pub monthly_rent: i64,

    #[validate(range(min = 0, message = "Deposit cannot be negative"))]
    pub deposit: i64,

    #[serde(default = "crate::dto::default_true")]
    pub is_active: bool,
}

fn validate_term(dto: &ContractDto) -> Result<(), ValidationError> {
    if dto.end_date <= dto.start_date {
        return Err(rule_violation(
            "end_not_after_start",
            "End date must be after start date",
        ));
    }
    Ok(())
}

impl EntityDto for ContractDto {
    type Entity = Contract;

    fn apply_to(self, contract: &mut Contract) {
        contract.apartment_id = self.apartment_id;
        contract.owner_id = self.owner_id;
        contract.tenant_id = self.tenant_id;
        contract.start_date = self.start_date;
        contract.end_date = self.end_date;
        contract.monthly_rent = self.monthly_rent;
        contract.deposit = self.deposit;
        contract.is_active = self.is_active;
    }
}
