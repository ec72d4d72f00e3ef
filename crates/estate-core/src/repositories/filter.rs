//! Persistence-agnostic predicates.
//!
//! A [`Filter`] is evaluated directly against entities by the in-memory
//! repository and rendered to a parameterized `WHERE` clause by the SQL one.
//! In-memory evaluation follows SQL three-valued logic so both stores agree
//! on comparisons involving `NULL`.

use std::ops::Not;

use crate::error::DomainError;

use super::entity::Entity;
use super::value::{Value, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    fn holds(&self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            CompareOp::Eq => ordering == Equal,
            CompareOp::Ne => ordering != Equal,
            CompareOp::Lt => ordering == Less,
            CompareOp::Le => ordering != Greater,
            CompareOp::Gt => ordering == Greater,
            CompareOp::Ge => ordering != Less,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Filter {
    /// Matches every row.
    #[default]
    All,
    Compare {
        column: String,
        op: CompareOp,
        value: Value,
    },
    /// Substring match on a text column, ignoring ASCII case only so the
    /// result matches SQLite's `LOWER`.
    Contains { column: String, text: String },
    IsNull(String),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Filter::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Eq, value)
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ne, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Lt, value)
    }

    pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Le, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Gt, value)
    }

    pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ge, value)
    }

    pub fn contains(column: impl Into<String>, text: impl Into<String>) -> Self {
        Filter::Contains {
            column: column.into(),
            text: text.into(),
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Filter::IsNull(column.into())
    }

    /// Conjunction; `All` operands are dropped and nested `And`s flattened.
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, f) | (f, Filter::All) => f,
            (Filter::And(mut left), Filter::And(right)) => {
                left.extend(right);
                Filter::And(left)
            }
            (Filter::And(mut left), f) => {
                left.push(f);
                Filter::And(left)
            }
            (f, Filter::And(mut right)) => {
                right.insert(0, f);
                Filter::And(right)
            }
            (left, right) => Filter::And(vec![left, right]),
        }
    }

    pub fn or(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::Or(mut left), f) => {
                left.push(f);
                Filter::Or(left)
            }
            (left, right) => Filter::Or(vec![left, right]),
        }
    }

    /// Equality conjunction built from `column=value` pairs, as sent in an
    /// HTTP query string. Values are parsed by the column's kind; an empty
    /// value on a nullable column means `IS NULL`.
    pub fn from_pairs<E, K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, DomainError>
    where
        E: Entity,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Filter::All;
        for (column, raw) in pairs {
            let (column, raw) = (column.as_ref(), raw.as_ref());
            let (kind, nullable) = if column == "id" {
                (ValueKind::Int, false)
            } else {
                E::COLUMNS
                    .iter()
                    .find(|c| c.name == column)
                    .map(|c| (c.kind, c.nullable))
                    .ok_or_else(|| {
                        DomainError::ValidationError(format!("Unknown {} column: {}", E::NAME, column))
                    })?
            };
            let clause = if raw.is_empty() && nullable {
                Filter::is_null(column)
            } else {
                Filter::eq(column, Value::parse(kind, raw)?)
            };
            filter = filter.and(clause);
        }
        Ok(filter)
    }

    /// Every column name the filter mentions.
    pub fn columns(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Filter::All => {}
            Filter::Compare { column, .. } | Filter::Contains { column, .. } | Filter::IsNull(column) => {
                out.push(column.as_str())
            }
            Filter::And(parts) | Filter::Or(parts) => parts.iter().for_each(|p| p.collect_columns(out)),
            Filter::Not(inner) => inner.collect_columns(out),
        }
    }

    /// Rejects filters naming columns `E` does not have, and substring
    /// searches on columns that are not text.
    pub fn check_columns<E: Entity>(&self) -> Result<(), DomainError> {
        if let Some(unknown) = self.columns().into_iter().find(|c| !E::has_column(c)) {
            return Err(DomainError::ValidationError(format!(
                "Unknown {} column: {}",
                E::NAME,
                unknown
            )));
        }
        self.check_searches::<E>()
    }

    fn check_searches<E: Entity>(&self) -> Result<(), DomainError> {
        match self {
            Filter::Contains { column, .. } => {
                let is_text = E::COLUMNS
                    .iter()
                    .any(|c| c.name == column && c.kind == ValueKind::Text);
                if is_text {
                    Ok(())
                } else {
                    Err(not_searchable(column))
                }
            }
            Filter::And(parts) | Filter::Or(parts) => {
                parts.iter().try_for_each(|p| p.check_searches::<E>())
            }
            Filter::Not(inner) => inner.check_searches::<E>(),
            Filter::All | Filter::Compare { .. } | Filter::IsNull(_) => Ok(()),
        }
    }

    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        self.evaluate(entity) == Some(true)
    }

    /// `None` is SQL's UNKNOWN.
    fn evaluate<E: Entity>(&self, entity: &E) -> Option<bool> {
        match self {
            Filter::All => Some(true),
            Filter::Compare { column, op, value } => {
                let current = entity.field(column)?;
                current.compare(value).map(|ordering| op.holds(ordering))
            }
            Filter::Contains { column, text } => match entity.field(column)? {
                Value::Text(current) => Some(
                    current
                        .to_ascii_lowercase()
                        .contains(&text.to_ascii_lowercase()),
                ),
                _ => None,
            },
            Filter::IsNull(column) => entity.field(column).map(|v| v.is_null()),
            Filter::And(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.evaluate(entity) {
                        Some(false) => return Some(false),
                        None => unknown = true,
                        Some(true) => {}
                    }
                }
                if unknown { None } else { Some(true) }
            }
            Filter::Or(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.evaluate(entity) {
                        Some(true) => return Some(true),
                        None => unknown = true,
                        Some(false) => {}
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Filter::Not(inner) => inner.evaluate(entity).map(|b| !b),
        }
    }
}

/// Error for a substring search on a column that does not hold text.
pub fn not_searchable(column: &str) -> DomainError {
    DomainError::ValidationError(format!(
        "Column {} is not text and cannot be searched",
        column
    ))
}

impl Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        Filter::Not(Box::new(self))
    }
}
