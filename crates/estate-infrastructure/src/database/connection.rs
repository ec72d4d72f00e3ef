//! Database connection pool

use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::{error, info};

use estate_core::error::DomainError;
use estate_shared::config::DatabaseSettings;

/// `sqlite::memory:` style URLs, where every connection opens a new database.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

pub async fn create_pool(settings: &DatabaseSettings) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let mut options = AnyPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));

    if is_in_memory(&settings.url) {
        // one connection held for the pool's lifetime keeps the data alive
        options = options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(&settings.url).await?;
    info!("Database pool ready with {} open connection(s)", pool.size());
    Ok(pool)
}

pub async fn check_connection(pool: &AnyPool) -> Result<(), DomainError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            error!("Database health check failed: {}", e);
            DomainError::DatabaseError(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:estate?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://estate.db"));
        assert!(!is_in_memory("postgres://estate@localhost/estate"));
    }
}
