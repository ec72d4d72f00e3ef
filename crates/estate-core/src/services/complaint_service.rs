//! Complaint service

use crate::domain::{timestamp_now, Complaint, ComplaintStatus};
use crate::dto::ComplaintDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct ComplaintService {
    crud: CrudService<Complaint>,
}

impl ComplaintService {
    pub fn new(repo: SharedRepository<Complaint>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_status(&self, status: ComplaintStatus) -> ServiceResponse<Vec<Complaint>> {
        self.crud.list(&Filter::eq("status", status)).await
    }

    pub async fn by_apartment(&self, apartment_id: i64) -> ServiceResponse<Vec<Complaint>> {
        self.crud.list(&Filter::eq("apartment_id", apartment_id)).await
    }

    pub async fn start_progress(&self, id: i64) -> ServiceResponse<Complaint> {
        let result = self.crud.modify(id, |c| c.start_progress()).await;
        ServiceResponse::from_result(result, "Complaint in progress")
    }

    pub async fn resolve(&self, id: i64) -> ServiceResponse<Complaint> {
        let result = self.crud.modify(id, |c| c.resolve(timestamp_now())).await;
        ServiceResponse::from_result(result, "Complaint resolved")
    }
}

impl EntityService for ComplaintService {
    type Entity = Complaint;
    type Dto = ComplaintDto;

    fn crud(&self) -> &CrudService<Complaint> {
        &self.crud
    }
}
