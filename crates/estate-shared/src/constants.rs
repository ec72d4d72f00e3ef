//! Application-wide constants

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_LOG_LEVEL: &str = "info,estate=debug";
/// Minor currency units charged per overdue day when a payment names no rate.
pub const DEFAULT_DAILY_PENALTY_RATE: i64 = 50;
pub const API_PREFIX: &str = "/api";
