//! Apartment service

use crate::domain::Apartment;
use crate::dto::ApartmentDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct ApartmentService {
    crud: CrudService<Apartment>,
}

impl ApartmentService {
    pub fn new(repo: SharedRepository<Apartment>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_building(&self, building_id: i64) -> ServiceResponse<Vec<Apartment>> {
        self.crud.list(&Filter::eq("building_id", building_id)).await
    }

    /// Unoccupied apartments, optionally limited to one building.
    pub async fn vacant(&self, building_id: Option<i64>) -> ServiceResponse<Vec<Apartment>> {
        let mut filter = Filter::eq("is_occupied", false);
        if let Some(building_id) = building_id {
            filter = filter.and(Filter::eq("building_id", building_id));
        }
        self.crud.list(&filter).await
    }

    pub async fn set_occupied(&self, id: i64, occupied: bool) -> ServiceResponse<Apartment> {
        let result = self
            .crud
            .modify(id, |apartment| {
                apartment.is_occupied = occupied;
                Ok(())
            })
            .await;
        ServiceResponse::from_result(result, "Apartment occupancy updated")
    }
}

impl EntityService for ApartmentService {
    type Entity = Apartment;
    type Dto = ApartmentDto;

    fn crud(&self) -> &CrudService<Apartment> {
        &self.crud
    }
}
