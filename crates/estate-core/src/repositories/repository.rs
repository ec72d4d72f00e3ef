//! Generic repository trait (port)

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DomainError;

use super::entity::Entity;
use super::filter::Filter;

/// CRUD access to one entity type.
///
/// Each mutating call is committed on its own; nothing spans calls. Storage
/// failures are returned, never swallowed, on every method.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// First match ordered by id.
    async fn get(&self, filter: &Filter) -> Result<Option<E>, DomainError>;

    /// All matches ordered by id. Pass [`Filter::All`] for no predicate.
    async fn get_all(&self, filter: &Filter) -> Result<Vec<E>, DomainError>;

    /// Stores a new entity and returns it with its assigned id.
    async fn add(&self, entity: E) -> Result<E, DomainError>;

    /// Fails with `NotFound` when no row has the entity's id.
    async fn update(&self, entity: &E) -> Result<E, DomainError>;

    /// Fails with `NotFound` when no row has the entity's id.
    async fn delete(&self, entity: &E) -> Result<(), DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        self.get(&Filter::eq("id", id)).await
    }
}

pub type SharedRepository<E> = Arc<dyn Repository<E>>;
