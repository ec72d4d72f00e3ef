//! Payment service
//!
//! Dues, rent and utility charges plus the delay penalty that accrues on
//! them. The penalty is computed on read from `daily_penalty_rate`; nothing
//! derived is stored.

use chrono::NaiveDate;
use estate_shared::utils::format_money;
use serde::Serialize;
use tracing::info;

use crate::domain::Payment;
use crate::dto::PaymentDto;
use crate::error::DomainError;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

/// Penalty owed on one payment as of a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyQuote {
    pub payment_id: i64,
    pub as_of: NaiveDate,
    pub days_overdue: i64,
    pub daily_penalty_rate: i64,
    pub penalty: i64,
    pub total_due: i64,
}

impl PenaltyQuote {
    pub fn for_payment(payment: &Payment, as_of: NaiveDate) -> Self {
        Self {
            payment_id: payment.id,
            as_of,
            days_overdue: payment.days_overdue(as_of),
            daily_penalty_rate: payment.daily_penalty_rate,
            penalty: payment.delay_penalty(as_of),
            total_due: payment.total_due(as_of),
        }
    }
}

pub struct PaymentService {
    crud: CrudService<Payment>,
    default_daily_penalty_rate: i64,
}

impl PaymentService {
    pub fn new(repo: SharedRepository<Payment>, default_daily_penalty_rate: i64) -> Self {
        Self {
            crud: CrudService::new(repo),
            default_daily_penalty_rate,
        }
    }

    pub async fn by_apartment(&self, apartment_id: i64) -> ServiceResponse<Vec<Payment>> {
        self.crud.list(&Filter::eq("apartment_id", apartment_id)).await
    }

    pub async fn unpaid(&self) -> ServiceResponse<Vec<Payment>> {
        self.crud.list(&Filter::is_null("paid_on")).await
    }

    /// Unpaid payments whose due date is before `today`.
    pub async fn overdue(&self, today: NaiveDate) -> ServiceResponse<Vec<Payment>> {
        let filter = Filter::is_null("paid_on").and(Filter::lt("due_date", today));
        self.crud.list(&filter).await
    }

    pub async fn delay_penalty(&self, id: i64, today: NaiveDate) -> ServiceResponse<PenaltyQuote> {
        let result = self
            .crud
            .load(id)
            .await
            .map(|payment| PenaltyQuote::for_payment(&payment, today));
        ServiceResponse::from_result(result, "Delay penalty calculated")
    }

    pub async fn mark_paid(&self, id: i64, date: NaiveDate) -> ServiceResponse<Payment> {
        let result = self
            .crud
            .modify(id, |payment| {
                if payment.is_paid() {
                    return Err(DomainError::ValidationError(format!(
                        "Payment {} is already paid",
                        payment.id
                    )));
                }
                payment.paid_on = Some(date);
                Ok(())
            })
            .await;
        if let Ok(payment) = &result {
            info!(
                "Payment {} of {} recorded on {}",
                payment.id,
                format_money(payment.amount),
                date
            );
        }
        ServiceResponse::from_result(result, "Payment recorded")
    }
}

impl EntityService for PaymentService {
    type Entity = Payment;
    type Dto = PaymentDto;

    fn crud(&self) -> &CrudService<Payment> {
        &self.crud
    }

    fn prepare(&self, mut dto: PaymentDto) -> PaymentDto {
        dto.daily_penalty_rate.get_or_insert(self.default_daily_penalty_rate);
        dto
    }
}
