//! Generic CRUD service shared by every entity.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::dto::EntityDto;
use crate::error::DomainError;
use crate::repositories::{Entity, Filter, SharedRepository};
use crate::validation::validate_dto;

use super::response::ServiceResponse;

/// Pass-through CRUD over one repository.
///
/// The `Result` methods (`load`, `find`, `insert`, ...) are the building
/// blocks domain services compose; `get`, `list`, `create`, `update` and
/// `delete` wrap them in the response envelope.
pub struct CrudService<E: Entity> {
    repo: SharedRepository<E>,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(repo: SharedRepository<E>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &SharedRepository<E> {
        &self.repo
    }

    pub async fn load(&self, id: i64) -> Result<E, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<E>(id))
    }

    pub async fn find(&self, filter: &Filter) -> Result<Vec<E>, DomainError> {
        debug!("Listing {} with {:?}", E::TABLE, filter);
        self.repo.get_all(filter).await
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<E>, DomainError> {
        self.repo.get(filter).await
    }

    pub async fn insert<D: EntityDto<Entity = E>>(&self, dto: D) -> Result<E, DomainError> {
        validate_dto(&dto)?;
        let created = self.repo.add(dto.into_new()).await?;
        info!("{} created with id {}", E::NAME, created.id());
        Ok(created)
    }

    pub async fn replace<D: EntityDto<Entity = E>>(&self, id: i64, dto: D) -> Result<E, DomainError> {
        validate_dto(&dto)?;
        let mut entity = self.load(id).await?;
        dto.apply_to(&mut entity);
        self.save(&entity).await
    }

    pub async fn save(&self, entity: &E) -> Result<E, DomainError> {
        let saved = self.repo.update(entity).await?;
        info!("{} {} updated", E::NAME, saved.id());
        Ok(saved)
    }

    /// Loads, mutates and saves one entity.
    pub async fn modify<F>(&self, id: i64, change: F) -> Result<E, DomainError>
    where
        F: FnOnce(&mut E) -> Result<(), DomainError> + Send,
    {
        let mut entity = self.load(id).await?;
        change(&mut entity)?;
        self.save(&entity).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        let entity = self.load(id).await?;
        self.repo.delete(&entity).await?;
        info!("{} {} deleted", E::NAME, id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> ServiceResponse<E> {
        ServiceResponse::from_result(self.load(id).await, format!("{} retrieved", E::NAME))
    }

    pub async fn list(&self, filter: &Filter) -> ServiceResponse<Vec<E>> {
        let result = self.find(filter).await;
        let count = result.as_ref().map(Vec::len).unwrap_or_default();
        ServiceResponse::from_result(result, format!("{} {} record(s) found", count, E::NAME))
    }

    pub async fn create<D: EntityDto<Entity = E>>(&self, dto: D) -> ServiceResponse<E> {
        ServiceResponse::from_result(self.insert(dto).await, format!("{} created", E::NAME))
    }

    pub async fn update<D: EntityDto<Entity = E>>(&self, id: i64, dto: D) -> ServiceResponse<E> {
        ServiceResponse::from_result(self.replace(id, dto).await, format!("{} updated", E::NAME))
    }

    pub async fn delete(&self, id: i64) -> ServiceResponse<()> {
        ServiceResponse::from_result(self.remove(id).await, format!("{} deleted", E::NAME))
    }
}

/// A domain service exposing the generic CRUD operations for its entity.
///
/// `prepare` lets a service fill server-side defaults into a payload before
/// it is validated and stored.
#[async_trait]
pub trait EntityService: Send + Sync + 'static {
    type Entity: Entity + Serialize;
    type Dto: EntityDto<Entity = Self::Entity> + DeserializeOwned;

    fn crud(&self) -> &CrudService<Self::Entity>;

    fn prepare(&self, dto: Self::Dto) -> Self::Dto {
        dto
    }

    async fn get(&self, id: i64) -> ServiceResponse<Self::Entity> {
        self.crud().get(id).await
    }

    async fn list(&self, filter: &Filter) -> ServiceResponse<Vec<Self::Entity>> {
        self.crud().list(filter).await
    }

    async fn create(&self, dto: Self::Dto) -> ServiceResponse<Self::Entity> {
        let dto = self.prepare(dto);
        self.crud().create(dto).await
    }

    async fn update(&self, id: i64, dto: Self::Dto) -> ServiceResponse<Self::Entity> {
        let dto = self.prepare(dto);
        self.crud().update(id, dto).await
    }

    async fn delete(&self, id: i64) -> ServiceResponse<()> {
        self.crud().delete(id).await
    }
}
