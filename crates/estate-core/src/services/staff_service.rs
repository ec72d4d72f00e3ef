//! Staff service

use crate::domain::{Staff, StaffDuty};
use crate::dto::StaffDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct StaffService {
    crud: CrudService<Staff>,
}

impl StaffService {
    pub fn new(repo: SharedRepository<Staff>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_building(&self, building_id: i64) -> ServiceResponse<Vec<Staff>> {
        self.crud.list(&Filter::eq("building_id", building_id)).await
    }

    pub async fn by_duty(&self, duty: StaffDuty) -> ServiceResponse<Vec<Staff>> {
        self.crud.list(&Filter::eq("duty", duty)).await
    }
}

impl EntityService for StaffService {
    type Entity = Staff;
    type Dto = StaffDto;

    fn crud(&self) -> &CrudService<Staff> {
        &self.crud
    }
}
