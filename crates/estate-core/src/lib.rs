//! # Estate Core
//!
//! Domain entities, DTOs, services, and the generic repository contract for
//! the apartment management platform. Persistence adapters live in
//! `estate-infrastructure`; this crate only knows the [`repositories::Repository`]
//! port and an in-memory implementation of it.

pub mod repositories;
pub mod domain;
pub mod dto;
pub mod validation;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
