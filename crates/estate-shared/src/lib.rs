//! # Estate Shared
//!
//! Configuration, telemetry, and small utilities shared by every Estate crate.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
