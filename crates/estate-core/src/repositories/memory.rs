//! In-memory repository used by tests and local tooling.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::DomainError;

use super::entity::Entity;
use super::filter::Filter;
use super::repository::Repository;
use super::value::Value;

/// Rows kept in id order behind a lock. Ids start at 1 and are never reused.
pub struct MemoryRepository<E: Entity> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

/// Mirrors the unique indexes the relational schema puts on `E::UNIQUE`.
fn check_unique<E: Entity>(rows: &BTreeMap<i64, E>, entity: &E) -> Result<(), DomainError> {
    for column in E::UNIQUE {
        let value = match entity.field(column) {
            Some(Value::Null) | None => continue,
            Some(value) => value,
        };
        let taken = rows
            .values()
            .any(|row| row.id() != entity.id() && row.field(column).as_ref() == Some(&value));
        if taken {
            warn!("Unique violation on {}.{}", E::TABLE, column);
            return Err(DomainError::Conflict(format!("{} already exists", E::NAME)));
        }
    }
    Ok(())
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get(&self, filter: &Filter) -> Result<Option<E>, DomainError> {
        filter.check_columns::<E>()?;
        let rows = self.rows.read();
        Ok(rows.values().find(|e| filter.matches(*e)).cloned())
    }

    async fn get_all(&self, filter: &Filter) -> Result<Vec<E>, DomainError> {
        filter.check_columns::<E>()?;
        let rows = self.rows.read();
        let found: Vec<E> = rows.values().filter(|e| filter.matches(*e)).cloned().collect();
        debug!("Memory {} query matched {} rows", E::TABLE, found.len());
        Ok(found)
    }

    async fn add(&self, mut entity: E) -> Result<E, DomainError> {
        let mut rows = self.rows.write();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        check_unique(&rows, &entity)?;
        rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &E) -> Result<E, DomainError> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&entity.id()) {
            return Err(DomainError::not_found::<E>(entity.id()));
        }
        check_unique(&rows, entity)?;
        rows.insert(entity.id(), entity.clone());
        Ok(entity.clone())
    }

    async fn delete(&self, entity: &E) -> Result<(), DomainError> {
        self.rows
            .write()
            .remove(&entity.id())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found::<E>(entity.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Apartment, Building, User};

    fn apartment(number: &str, occupied: bool) -> Apartment {
        Apartment {
            building_id: 1,
            number: number.to_string(),
            floor: 1,
            room_count: 2,
            area_sqm: 45.0,
            is_occupied: occupied,
            monthly_dues: 150_000,
            ..Apartment::default()
        }
    }

    #[tokio::test]
    async fn test_add_assigns_increasing_ids() {
        let repo = MemoryRepository::<Apartment>::new();
        let a = repo.add(apartment("1", false)).await.unwrap();
        let b = repo.add(apartment("2", true)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.len(), 2);

        repo.delete(&a).await.unwrap();
        let c = repo.add(apartment("3", false)).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_get_all_filters_in_id_order() {
        let repo = MemoryRepository::<Apartment>::new();
        for (n, occupied) in [("1", false), ("2", true), ("3", false)] {
            repo.add(apartment(n, occupied)).await.unwrap();
        }
        let vacant = repo.get_all(&Filter::eq("is_occupied", false)).await.unwrap();
        let numbers: Vec<_> = vacant.iter().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "3"]);

        let first = repo.get(&Filter::All).await.unwrap().unwrap();
        assert_eq!(first.number, "1");
        assert!(repo.get(&Filter::eq("number", "9")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row() {
        let repo = MemoryRepository::<Building>::new();
        let ghost = Building {
            id: 41,
            ..Building::default()
        };
        assert_eq!(
            repo.update(&ghost).await.unwrap_err(),
            DomainError::NotFound { entity: "Building", id: 41 }
        );
        assert!(matches!(repo.delete(&ghost).await, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let repo = MemoryRepository::<Apartment>::new();
        let mut a = repo.add(apartment("7", false)).await.unwrap();
        a.is_occupied = true;
        repo.update(&a).await.unwrap();
        assert_eq!(repo.get_by_id(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn test_unique_columns_are_enforced() {
        let repo = MemoryRepository::<User>::new();
        let user = |email: &str| User {
            full_name: "Dewi Lestari".into(),
            email: email.into(),
            ..User::default()
        };
        let first = repo.add(user("dewi@example.com")).await.unwrap();
        let mut second = repo.add(user("dewi2@example.com")).await.unwrap();

        assert_eq!(
            repo.add(user("dewi@example.com")).await.unwrap_err(),
            DomainError::Conflict("User already exists".into())
        );
        second.email = first.email.clone();
        assert!(matches!(repo.update(&second).await, Err(DomainError::Conflict(_))));

        repo.update(&first).await.unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_filter_column_is_validation_error() {
        let repo = MemoryRepository::<Apartment>::new();
        let err = repo.get_all(&Filter::eq("owner", 1)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}
