//! Tenant service

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{Apartment, Tenant};
use crate::dto::TenantDto;
use crate::error::DomainError;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct TenantService {
    crud: CrudService<Tenant>,
    apartments: CrudService<Apartment>,
}

impl TenantService {
    pub fn new(repo: SharedRepository<Tenant>, apartments: SharedRepository<Apartment>) -> Self {
        Self {
            crud: CrudService::new(repo),
            apartments: CrudService::new(apartments),
        }
    }

    pub async fn by_apartment(&self, apartment_id: i64) -> ServiceResponse<Vec<Tenant>> {
        self.crud.list(&Filter::eq("apartment_id", apartment_id)).await
    }

    /// Tenants of the apartment who have not moved out.
    pub async fn current_residents(&self, apartment_id: i64) -> ServiceResponse<Vec<Tenant>> {
        let filter = Filter::eq("apartment_id", apartment_id).and(Filter::is_null("moved_out_on"));
        self.crud.list(&filter).await
    }

    /// Records the move-out and marks the apartment vacant.
    ///
    /// The two writes are separate commits; if freeing the apartment fails
    /// the move-out stays recorded and the failure is reported.
    pub async fn move_out(&self, id: i64, date: NaiveDate) -> ServiceResponse<Tenant> {
        ServiceResponse::from_result(self.try_move_out(id, date).await, "Tenant moved out")
    }

    async fn try_move_out(&self, id: i64, date: NaiveDate) -> Result<Tenant, DomainError> {
        let tenant = self
            .crud
            .modify(id, |tenant| {
                if !tenant.is_resident() {
                    return Err(DomainError::ValidationError(format!(
                        "Tenant {} has already moved out",
                        tenant.id
                    )));
                }
                if date < tenant.moved_in_on {
                    return Err(DomainError::ValidationError(
                        "Move-out date cannot be before move-in date".to_string(),
                    ));
                }
                tenant.moved_out_on = Some(date);
                Ok(())
            })
            .await?;

        self.apartments
            .modify(tenant.apartment_id, |apartment| {
                apartment.is_occupied = false;
                Ok(())
            })
            .await?;

        info!("Tenant {} moved out of apartment {}", tenant.id, tenant.apartment_id);
        Ok(tenant)
    }
}

impl EntityService for TenantService {
    type Entity = Tenant;
    type Dto = TenantDto;

    fn crud(&self) -> &CrudService<Tenant> {
        &self.crud
    }
}
