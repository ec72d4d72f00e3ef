//! # Estate Infrastructure
//!
//! Relational adapters for the `estate-core` repository port. One
//! [`SqlRepository`] serves every entity over a `sqlx` `Any` pool, so the same
//! code runs against PostgreSQL in deployments and in-memory SQLite in tests.

pub mod database;

pub use database::{
    check_connection, create_pool, run_migrations, sql_repositories, Dialect, SqlRepository,
};
