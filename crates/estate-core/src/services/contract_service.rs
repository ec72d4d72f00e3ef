//! Contract (lease) service

use chrono::NaiveDate;

use crate::domain::Contract;
use crate::dto::ContractDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct ContractService {
    crud: CrudService<Contract>,
}

impl ContractService {
    pub fn new(repo: SharedRepository<Contract>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_tenant(&self, tenant_id: i64) -> ServiceResponse<Vec<Contract>> {
        self.crud.list(&Filter::eq("tenant_id", tenant_id)).await
    }

    /// Active contracts whose term covers `date`.
    pub async fn active_on(&self, date: NaiveDate) -> ServiceResponse<Vec<Contract>> {
        let filter = Filter::eq("is_active", true)
            .and(Filter::le("start_date", date))
            .and(Filter::ge("end_date", date));
        self.crud.list(&filter).await
    }

    pub async fn terminate(&self, id: i64, date: NaiveDate) -> ServiceResponse<Contract> {
        let result = self
            .crud
            .modify(id, |contract| contract.terminate(date))
            .await;
        ServiceResponse::from_result(result, "Contract terminated")
    }
}

impl EntityService for ContractService {
    type Entity = Contract;
    type Dto = ContractDto;

    fn crud(&self) -> &CrudService<Contract> {
        &self.crud
    }
}
