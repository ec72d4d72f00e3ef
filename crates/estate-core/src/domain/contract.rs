//! Contract (lease) domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity;
use crate::error::DomainError;

/// Lease between an owner and a tenant for one apartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Contract {
    pub id: i64,
    pub apartment_id: i64,
    pub owner_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: i64,
    pub deposit: i64,
    pub is_active: bool,
}

entity!(Contract, name = "Contract", table = "contracts", {
    apartment_id: i64 => "apartments",
    owner_id: i64 => "owners",
    tenant_id: i64 => "tenants",
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_rent: i64,
    deposit: i64,
    is_active: bool,
});

impl Contract {
    /// Active and `date` falls within `[start_date, end_date]`.
    pub fn is_in_force_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.start_date <= date && date <= self.end_date
    }

    /// Ends an active lease early: `end_date` becomes `date`, which must
    /// fall after `start_date` and no later than the scheduled end.
    pub fn terminate(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        if !self.is_active {
            return Err(DomainError::ValidationError(format!(
                "Contract {} is already terminated",
                self.id
            )));
        }
        if date <= self.start_date {
            return Err(DomainError::ValidationError(format!(
                "Contract {} must end after it starts on {}",
                self.id, self.start_date
            )));
        }
        if date > self.end_date {
            return Err(DomainError::ValidationError(format!(
                "Contract {} already ends on {}",
                self.id, self.end_date
            )));
        }
        self.end_date = date;
        self.is_active = false;
        Ok(())
    }
}
