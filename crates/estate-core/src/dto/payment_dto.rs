use chrono::NaiveDate;
use estate_shared::constants::DEFAULT_DAILY_PENALTY_RATE;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::{Payment, PaymentKind};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentDto {
    #[validate(range(min = 1, message = "Apartment is required"))]
    pub apartment_id: i64,

    #[validate(range(min = 1, message = "Payer must reference a user"))]
    pub payer_user_id: Option<i64>,

    #[serde(default)]
    pub kind: PaymentKind,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,

    pub due_date: NaiveDate,

    pub paid_on: Option<NaiveDate>,

    /// Falls back to the configured billing rate when omitted.
    #[validate(range(min = 0, message = "Daily penalty rate cannot be negative"))]
    pub daily_penalty_rate: Option<i64>,
}

impl EntityDto for PaymentDto {
    type Entity = Payment;

    fn apply_to(self, payment: &mut Payment) {
        payment.apartment_id = self.apartment_id;
        payment.payer_user_id = self.payer_user_id;
        payment.kind = self.kind;
        payment.amount = self.amount;
        payment.due_date = self.due_date;
        payment.paid_on = self.paid_on;
        payment.daily_penalty_rate = self.daily_penalty_rate.unwrap_or(DEFAULT_DAILY_PENALTY_RATE);
    }
}
