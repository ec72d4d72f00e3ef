//! Building service

use crate::domain::Building;
use crate::dto::BuildingDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct BuildingService {
    crud: CrudService<Building>,
}

impl BuildingService {
    pub fn new(repo: SharedRepository<Building>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_city(&self, city: &str) -> ServiceResponse<Vec<Building>> {
        self.crud.list(&Filter::eq("city", city.trim())).await
    }
}

impl EntityService for BuildingService {
    type Entity = Building;
    type Dto = BuildingDto;

    fn crud(&self) -> &CrudService<Building> {
        &self.crud
    }
}
