//! Database module (sqlx `Any` adapters)

pub mod connection;
pub mod schema;
pub mod sql_repository;

pub use connection::{check_connection, create_pool};
pub use schema::{run_migrations, Dialect};
pub use sql_repository::{sql_repositories, SqlRepository};
