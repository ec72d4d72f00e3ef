//! Synchronous façade over an async repository.

use std::marker::PhantomData;

use tokio::runtime::{Builder, Runtime};

use crate::error::DomainError;

use super::entity::Entity;
use super::filter::Filter;
use super::repository::Repository;

/// Drives an async repository on its own current-thread runtime.
///
/// Meant for callers that are not already inside a Tokio runtime (scripts,
/// seeders, plain `#[test]`s); calling it from async code panics.
pub struct BlockingRepository<E: Entity, R: Repository<E>> {
    inner: R,
    runtime: Runtime,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: Repository<E>> BlockingRepository<E, R> {
    pub fn new(inner: R) -> Result<Self, DomainError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to build runtime: {}", e)))?;
        Ok(Self {
            inner,
            runtime,
            _entity: PhantomData,
        })
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn get(&self, filter: &Filter) -> Result<Option<E>, DomainError> {
        self.runtime.block_on(self.inner.get(filter))
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        self.runtime.block_on(self.inner.get_by_id(id))
    }

    pub fn get_all(&self, filter: &Filter) -> Result<Vec<E>, DomainError> {
        self.runtime.block_on(self.inner.get_all(filter))
    }

    pub fn add(&self, entity: E) -> Result<E, DomainError> {
        self.runtime.block_on(self.inner.add(entity))
    }

    pub fn update(&self, entity: &E) -> Result<E, DomainError> {
        self.runtime.block_on(self.inner.update(entity))
    }

    pub fn delete(&self, entity: &E) -> Result<(), DomainError> {
        self.runtime.block_on(self.inner.delete(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Staff, StaffDuty};
    use crate::repositories::MemoryRepository;

    #[test]
    fn test_sync_crud_round() {
        let repo = BlockingRepository::new(MemoryRepository::<Staff>::new()).unwrap();
        let guard = repo
            .add(Staff {
                user_id: 4,
                building_id: 1,
                duty: StaffDuty::Security,
                shift: "night".into(),
                ..Staff::default()
            })
            .unwrap();

        let mut found = repo.get_by_id(guard.id).unwrap().unwrap();
        found.shift = "day".into();
        repo.update(&found).unwrap();

        let day_shift = repo.get_all(&Filter::eq("shift", "day")).unwrap();
        assert_eq!(day_shift.len(), 1);

        repo.delete(&found).unwrap();
        assert!(repo.get(&Filter::All).unwrap().is_none());
        assert!(repo.inner().is_empty());
    }
}
