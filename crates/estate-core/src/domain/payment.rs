//! Payment domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{entity, text_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    #[default]
    Dues,
    Rent,
    Utility,
    Other,
}

text_enum!(PaymentKind {
    Dues => "dues",
    Rent => "rent",
    Utility => "utility",
    Other => "other",
});

/// A charge against an apartment. Amounts are minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Payment {
    pub id: i64,
    pub apartment_id: i64,
    pub payer_user_id: Option<i64>,
    pub kind: PaymentKind,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub paid_on: Option<NaiveDate>,
    /// Charged for each day the payment is settled after `due_date`.
    pub daily_penalty_rate: i64,
}

entity!(Payment, name = "Payment", table = "payments", {
    apartment_id: i64 => "apartments",
    payer_user_id: Option<i64> => "users",
    kind: PaymentKind,
    amount: i64,
    due_date: NaiveDate,
    paid_on: Option<NaiveDate>,
    daily_penalty_rate: i64,
});

impl Payment {
    pub fn is_paid(&self) -> bool {
        self.paid_on.is_some()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_paid() && today > self.due_date
    }

    /// Days between the due date and settlement (or `today` while unpaid).
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        let settled = self.paid_on.unwrap_or(today);
        (settled - self.due_date).num_days().max(0)
    }

    /// Days overdue × daily rate.
    pub fn delay_penalty(&self, today: NaiveDate) -> i64 {
        self.days_overdue(today).saturating_mul(self.daily_penalty_rate)
    }

    pub fn total_due(&self, today: NaiveDate) -> i64 {
        self.amount.saturating_add(self.delay_penalty(today))
    }
}
