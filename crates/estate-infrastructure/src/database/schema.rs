//! Table definitions generated from the entity column lists.
//!
//! Both dialects get the same logical schema: a surrogate `id` key, one
//! column per entity field, `NOT NULL` unless the field is optional, and a
//! foreign key (plus index) for every referencing column.

use sqlx::AnyPool;
use tracing::{error, info};

use estate_core::domain::{
    Apartment, Building, Complaint, Contract, Meeting, Notification, Owner, Payment, Staff, Survey,
    Tenant, User,
};
use estate_core::error::DomainError;
use estate_core::repositories::{Entity, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, DomainError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Dialect::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Dialect::Sqlite)
        } else {
            Err(DomainError::InternalError(format!(
                "Unsupported database URL scheme: {}",
                url.split(':').next().unwrap_or_default()
            )))
        }
    }

    fn id_column(&self) -> &'static str {
        match self {
            Dialect::Postgres => "id BIGSERIAL PRIMARY KEY",
            Dialect::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }

    /// SQLite accepts the PostgreSQL spellings and the `Any` driver decodes
    /// by declared type, so both dialects share them.
    fn column_type(&self, kind: ValueKind) -> &'static str {
        match kind {
            ValueKind::Int => "BIGINT",
            ValueKind::Real => "DOUBLE PRECISION",
            ValueKind::Text => "TEXT",
            ValueKind::Bool => "BOOLEAN",
        }
    }
}

pub fn create_table_sql<E: Entity>(dialect: Dialect) -> String {
    let mut columns = vec![dialect.id_column().to_string()];
    for column in E::COLUMNS {
        let mut definition = format!("{} {}", column.name, dialect.column_type(column.kind));
        if !column.nullable {
            definition.push_str(" NOT NULL");
        }
        if let Some(table) = column.references {
            definition.push_str(&format!(" REFERENCES {}(id)", table));
        }
        columns.push(definition);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        E::TABLE,
        columns.join(",\n    ")
    )
}

fn index_sql<E: Entity>() -> Vec<String> {
    E::COLUMNS
        .iter()
        .filter(|c| c.references.is_some())
        .map(|c| {
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_{column} ON {table} ({column})",
                table = E::TABLE,
                column = c.name
            )
        })
        .collect()
}

fn unique_index_sql<E: Entity>() -> Vec<String> {
    E::UNIQUE
        .iter()
        .map(|column| {
            format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS uq_{table}_{column} ON {table} ({column})",
                table = E::TABLE,
                column = column
            )
        })
        .collect()
}

fn statements_for<E: Entity>(dialect: Dialect, out: &mut Vec<String>) {
    out.push(create_table_sql::<E>(dialect));
    out.extend(unique_index_sql::<E>());
    out.extend(index_sql::<E>());
}

/// Every DDL statement, parents before the tables referencing them.
pub fn schema_statements(dialect: Dialect) -> Vec<String> {
    let mut out = Vec::new();
    statements_for::<User>(dialect, &mut out);
    statements_for::<Building>(dialect, &mut out);
    statements_for::<Apartment>(dialect, &mut out);
    statements_for::<Owner>(dialect, &mut out);
    statements_for::<Tenant>(dialect, &mut out);
    statements_for::<Contract>(dialect, &mut out);
    statements_for::<Payment>(dialect, &mut out);
    statements_for::<Complaint>(dialect, &mut out);
    statements_for::<Survey>(dialect, &mut out);
    statements_for::<Meeting>(dialect, &mut out);
    statements_for::<Notification>(dialect, &mut out);
    statements_for::<Staff>(dialect, &mut out);
    out
}

/// Creates any missing tables and indexes. Safe to run on every start.
pub async fn run_migrations(pool: &AnyPool, dialect: Dialect) -> Result<(), DomainError> {
    let statements = schema_statements(dialect);
    for statement in &statements {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            error!("Migration failed: {}\n{}", e, statement);
            DomainError::DatabaseError(e.to_string())
        })?;
    }
    info!("Schema up to date ({} statements, {:?})", statements.len(), dialect);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_url() {
        assert_eq!(Dialect::from_url("postgres://u@h/db").unwrap(), Dialect::Postgres);
        assert_eq!(Dialect::from_url("postgresql://u@h/db").unwrap(), Dialect::Postgres);
        assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
        assert!(Dialect::from_url("mysql://u@h/db").is_err());
    }

    #[test]
    fn test_apartment_table() {
        let sql = create_table_sql::<Apartment>(Dialect::Postgres);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS apartments"));
        assert!(sql.contains("id BIGSERIAL PRIMARY KEY"));
        assert!(sql.contains("building_id BIGINT NOT NULL REFERENCES buildings(id)"));
        assert!(sql.contains("area_sqm DOUBLE PRECISION NOT NULL"));
        assert!(sql.contains("is_occupied BOOLEAN NOT NULL"));
    }

    #[test]
    fn test_optional_columns_nullable() {
        let sql = create_table_sql::<Building>(Dialect::Sqlite);
        assert!(sql.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("manager_user_id BIGINT REFERENCES users(id)"));
        assert!(!sql.contains("manager_user_id BIGINT NOT NULL"));
    }

    #[test]
    fn test_parents_created_first() {
        let statements = schema_statements(Dialect::Sqlite);
        let position = |table: &str| {
            statements
                .iter()
                .position(|s| s.starts_with(&format!("CREATE TABLE IF NOT EXISTS {} ", table)))
                .unwrap()
        };
        assert!(position("users") < position("buildings"));
        assert!(position("buildings") < position("apartments"));
        assert!(position("owners") < position("contracts"));
        assert!(position("tenants") < position("contracts"));
        assert!(statements.contains(&"CREATE INDEX IF NOT EXISTS idx_payments_apartment_id ON payments (apartment_id)".to_string()));
    }

    #[test]
    fn test_unique_indexes_follow_entity() {
        assert_eq!(
            unique_index_sql::<User>(),
            vec!["CREATE UNIQUE INDEX IF NOT EXISTS uq_users_email ON users (email)".to_string()]
        );
        assert!(unique_index_sql::<Apartment>().is_empty());
    }
}
