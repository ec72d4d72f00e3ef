//! Owner service

use crate::domain::Owner;
use crate::dto::OwnerDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct OwnerService {
    crud: CrudService<Owner>,
}

impl OwnerService {
    pub fn new(repo: SharedRepository<Owner>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn by_user(&self, user_id: i64) -> ServiceResponse<Vec<Owner>> {
        self.crud.list(&Filter::eq("user_id", user_id)).await
    }

    pub async fn by_apartment(&self, apartment_id: i64) -> ServiceResponse<Vec<Owner>> {
        self.crud.list(&Filter::eq("apartment_id", apartment_id)).await
    }
}

impl EntityService for OwnerService {
    type Entity = Owner;
    type Dto = OwnerDto;

    fn crud(&self) -> &CrudService<Owner> {
        &self.crud
    }
}
