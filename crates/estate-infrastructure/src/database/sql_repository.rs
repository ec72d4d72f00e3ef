//! Relational implementation of the generic repository.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::error::ErrorKind;
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Row};
use tracing::{debug, error, warn};

use estate_core::error::DomainError;
use estate_core::repositories::{
    not_searchable, Entity, Filter, Repository, RepositorySet, Value, ValueKind,
};

type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// Positional parameters collected while rendering a `WHERE` clause.
#[derive(Debug, Default)]
struct WhereClause {
    params: Vec<(Value, ValueKind)>,
}

impl WhereClause {
    fn push_param(&mut self, value: Value, kind: ValueKind) -> String {
        self.params.push((value, kind));
        format!("${}", self.params.len())
    }
}

/// CRUD for any [`Entity`] against the table its column list describes.
pub struct SqlRepository<E: Entity> {
    pool: AnyPool,
    select_sql: String,
    insert_sql: String,
    update_sql: String,
    delete_sql: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqlRepository<E> {
    pub fn new(pool: AnyPool) -> Self {
        let names: Vec<&str> = E::COLUMNS.iter().map(|c| c.name).collect();
        let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("${}", i)).collect();
        let assignments: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{} = ${}", name, i + 1))
            .collect();

        Self {
            pool,
            select_sql: format!("SELECT id, {} FROM {}", names.join(", "), E::TABLE),
            insert_sql: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
                E::TABLE,
                names.join(", "),
                placeholders.join(", ")
            ),
            update_sql: format!(
                "UPDATE {} SET {} WHERE id = ${}",
                E::TABLE,
                assignments.join(", "),
                names.len() + 1
            ),
            delete_sql: format!("DELETE FROM {} WHERE id = $1", E::TABLE),
            _entity: PhantomData,
        }
    }

    fn column_kind(name: &str) -> Option<ValueKind> {
        if name == "id" {
            return Some(ValueKind::Int);
        }
        E::COLUMNS.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    fn unknown_column(name: &str) -> DomainError {
        DomainError::ValidationError(format!("Unknown {} column: {}", E::NAME, name))
    }

    /// Renders `filter` into `clause`. Column names are checked against the
    /// entity before they are written into the SQL text.
    fn render(filter: &Filter, clause: &mut WhereClause) -> Result<String, DomainError> {
        let sql = match filter {
            Filter::All => "1 = 1".to_string(),
            Filter::Compare { column, op, value } => {
                let kind = Self::column_kind(column).ok_or_else(|| Self::unknown_column(column))?;
                let placeholder = clause.push_param(value.clone(), kind);
                format!("{} {} {}", column, op.as_sql(), placeholder)
            }
            Filter::Contains { column, text } => {
                match Self::column_kind(column) {
                    Some(ValueKind::Text) => {}
                    Some(_) => return Err(not_searchable(column)),
                    None => return Err(Self::unknown_column(column)),
                }
                let pattern = format!("%{}%", escape_like(&text.to_ascii_lowercase()));
                let placeholder = clause.push_param(Value::Text(pattern), ValueKind::Text);
                format!("LOWER({}) LIKE {} ESCAPE '\\'", column, placeholder)
            }
            Filter::IsNull(column) => {
                Self::column_kind(column).ok_or_else(|| Self::unknown_column(column))?;
                format!("{} IS NULL", column)
            }
            Filter::And(parts) if parts.is_empty() => "1 = 1".to_string(),
            Filter::Or(parts) if parts.is_empty() => "1 = 0".to_string(),
            Filter::And(parts) | Filter::Or(parts) => {
                let joiner = if matches!(filter, Filter::And(_)) { " AND " } else { " OR " };
                let rendered = parts
                    .iter()
                    .map(|part| Self::render(part, clause))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("({})", rendered.join(joiner))
            }
            Filter::Not(inner) => format!("NOT ({})", Self::render(inner, clause)?),
        };
        Ok(sql)
    }

    fn select(&self, filter: &Filter, limit_one: bool) -> Result<(String, WhereClause), DomainError> {
        filter.check_columns::<E>()?;
        let mut clause = WhereClause::default();
        let mut sql = self.select_sql.clone();
        if *filter != Filter::All {
            let condition = Self::render(filter, &mut clause)?;
            sql.push_str(" WHERE ");
            sql.push_str(&condition);
        }
        sql.push_str(" ORDER BY id");
        if limit_one {
            sql.push_str(" LIMIT 1");
        }
        Ok((sql, clause))
    }

    fn bind_entity<'q>(query: AnyQuery<'q>, entity: &E) -> AnyQuery<'q> {
        entity
            .values()
            .into_iter()
            .zip(E::COLUMNS.iter())
            .fold(query, |query, (value, column)| bind_value(query, value, column.kind))
    }

    fn decode(row: &AnyRow) -> Result<E, DomainError> {
        let id: i64 = row.try_get(0).map_err(|e| storage_error::<E>("decoding", e))?;
        let mut values = Vec::with_capacity(E::COLUMNS.len());
        for (index, column) in E::COLUMNS.iter().enumerate() {
            let value = decode_value(row, index + 1, column.kind)
                .map_err(|e| storage_error::<E>("decoding", e))?;
            values.push(value);
        }
        E::from_values(id, values)
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Binds with the column's declared type, so `NULL`s are typed too.
fn bind_value<'q>(query: AnyQuery<'q>, value: Value, kind: ValueKind) -> AnyQuery<'q> {
    match (value, kind) {
        (Value::Null, ValueKind::Int) => query.bind(None::<i64>),
        (Value::Null, ValueKind::Real) => query.bind(None::<f64>),
        (Value::Null, ValueKind::Text) => query.bind(None::<String>),
        (Value::Null, ValueKind::Bool) => query.bind(None::<bool>),
        (Value::Int(v), ValueKind::Real) => query.bind(v as f64),
        (Value::Int(v), _) => query.bind(v),
        (Value::Real(v), _) => query.bind(v),
        (Value::Text(v), _) => query.bind(v),
        (Value::Bool(v), _) => query.bind(v),
    }
}

/// SQLite may hand back booleans and whole reals as integers.
fn decode_value(row: &AnyRow, index: usize, kind: ValueKind) -> Result<Value, sqlx::Error> {
    let value = match kind {
        ValueKind::Int => row.try_get::<Option<i64>, _>(index)?.map(Value::Int),
        ValueKind::Real => match row.try_get::<Option<f64>, _>(index) {
            Ok(v) => v.map(Value::Real),
            Err(_) => row.try_get::<Option<i64>, _>(index)?.map(Value::Int),
        },
        ValueKind::Bool => match row.try_get::<Option<bool>, _>(index) {
            Ok(v) => v.map(Value::Bool),
            Err(_) => row.try_get::<Option<i64>, _>(index)?.map(Value::Int),
        },
        ValueKind::Text => row.try_get::<Option<String>, _>(index)?.map(Value::Text),
    };
    Ok(value.unwrap_or(Value::Null))
}

fn storage_error<E: Entity>(action: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        match db.kind() {
            ErrorKind::UniqueViolation => {
                warn!("Unique violation {} {}: {}", action, E::TABLE, db.message());
                return DomainError::Conflict(format!("{} already exists", E::NAME));
            }
            ErrorKind::ForeignKeyViolation => {
                warn!("Foreign key violation {} {}: {}", action, E::TABLE, db.message());
                return DomainError::Conflict(format!(
                    "{} references a missing row or is still referenced",
                    E::NAME
                ));
            }
            _ => {}
        }
    }
    error!("Database error {} {}: {}", action, E::TABLE, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl<E: Entity> Repository<E> for SqlRepository<E> {
    async fn get(&self, filter: &Filter) -> Result<Option<E>, DomainError> {
        let (sql, clause) = self.select(filter, true)?;
        debug!("{}", sql);
        let query = clause
            .params
            .into_iter()
            .fold(sqlx::query(&sql), |q, (value, kind)| bind_value(q, value, kind));
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error::<E>("reading", e))?;
        row.as_ref().map(Self::decode).transpose()
    }

    async fn get_all(&self, filter: &Filter) -> Result<Vec<E>, DomainError> {
        let (sql, clause) = self.select(filter, false)?;
        debug!("{}", sql);
        let query = clause
            .params
            .into_iter()
            .fold(sqlx::query(&sql), |q, (value, kind)| bind_value(q, value, kind));
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error::<E>("listing", e))?;
        rows.iter().map(Self::decode).collect()
    }

    async fn add(&self, mut entity: E) -> Result<E, DomainError> {
        let query = Self::bind_entity(sqlx::query(&self.insert_sql), &entity);
        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error::<E>("inserting into", e))?;
        let id: i64 = row.try_get(0).map_err(|e| storage_error::<E>("inserting into", e))?;
        entity.set_id(id);
        Ok(entity)
    }

    async fn update(&self, entity: &E) -> Result<E, DomainError> {
        let query = Self::bind_entity(sqlx::query(&self.update_sql), entity).bind(entity.id());
        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error::<E>("updating", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found::<E>(entity.id()));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, entity: &E) -> Result<(), DomainError> {
        let result = sqlx::query(&self.delete_sql)
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error::<E>("deleting from", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found::<E>(entity.id()));
        }
        Ok(())
    }
}

/// SQL-backed repositories for every entity, sharing one pool.
pub fn sql_repositories(pool: &AnyPool) -> RepositorySet {
    RepositorySet {
        users: Arc::new(SqlRepository::new(pool.clone())),
        buildings: Arc::new(SqlRepository::new(pool.clone())),
        apartments: Arc::new(SqlRepository::new(pool.clone())),
        owners: Arc::new(SqlRepository::new(pool.clone())),
        tenants: Arc::new(SqlRepository::new(pool.clone())),
        contracts: Arc::new(SqlRepository::new(pool.clone())),
        payments: Arc::new(SqlRepository::new(pool.clone())),
        complaints: Arc::new(SqlRepository::new(pool.clone())),
        surveys: Arc::new(SqlRepository::new(pool.clone())),
        meetings: Arc::new(SqlRepository::new(pool.clone())),
        notifications: Arc::new(SqlRepository::new(pool.clone())),
        staff: Arc::new(SqlRepository::new(pool.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::domain::{Apartment, Payment};

    fn render<E: Entity>(filter: &Filter) -> Result<(String, Vec<(Value, ValueKind)>), DomainError> {
        let mut clause = WhereClause::default();
        let sql = SqlRepository::<E>::render(filter, &mut clause)?;
        Ok((sql, clause.params))
    }

    #[test]
    fn test_render_numbers_placeholders_in_order() {
        let filter = Filter::eq("building_id", 3)
            .and(Filter::ge("area_sqm", 40))
            .and(!Filter::eq("is_occupied", true));
        let (sql, params) = render::<Apartment>(&filter).unwrap();
        assert_eq!(sql, "(building_id = $1 AND area_sqm >= $2 AND NOT (is_occupied = $3))");
        assert_eq!(params[1], (Value::Int(40), ValueKind::Real));
        assert_eq!(params[2], (Value::Bool(true), ValueKind::Bool));
    }

    #[test]
    fn test_render_contains_escapes_wildcards() {
        let (sql, params) = render::<Apartment>(&Filter::contains("number", "A_1%")).unwrap();
        assert_eq!(sql, "LOWER(number) LIKE $1 ESCAPE '\\'");
        assert_eq!(params[0].0, Value::Text("%a\\_1\\%%".into()));
    }

    #[test]
    fn test_render_rejects_bad_columns() {
        assert!(matches!(
            render::<Apartment>(&Filter::eq("1=1; --", 1)),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            render::<Apartment>(&Filter::contains("floor", "2")),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_render_null_and_empty_groups() {
        let (sql, params) =
            render::<Payment>(&Filter::is_null("paid_on").or(Filter::Or(Vec::new()))).unwrap();
        assert_eq!(sql, "(paid_on IS NULL OR 1 = 0)");
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_statement_text() {
        sqlx::any::install_default_drivers();
        let pool = sqlx::any::AnyPoolOptions::new()
            .connect_lazy("sqlite::memory:")
            .unwrap();
        let repo = SqlRepository::<Payment>::new(pool);
        assert_eq!(
            repo.insert_sql,
            "INSERT INTO payments (apartment_id, payer_user_id, kind, amount, due_date, paid_on, daily_penalty_rate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id"
        );
        assert!(repo.update_sql.ends_with("daily_penalty_rate = $7 WHERE id = $8"));
        assert_eq!(repo.delete_sql, "DELETE FROM payments WHERE id = $1");
    }
}
