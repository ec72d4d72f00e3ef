//! Column values and the per-entity column description.
//!
//! Every persisted entity describes itself as an ordered list of [`Column`]s
//! and converts to and from a matching list of [`Value`]s. Repositories only
//! ever see this description, which is what lets one implementation serve all
//! entity types.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::DomainError;

/// Storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Real,
    Text,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ValueKind,
    pub nullable: bool,
    /// Table this column points at, when it is a foreign key.
    pub references: Option<&'static str>,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// SQL-style ordering: anything compared with `Null` is unknown, and
    /// values of unrelated kinds do not compare.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Real(b)) => (*a as f64).partial_cmp(b),
            (Value::Real(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Parses user input (e.g. a query-string value) as a value of `kind`.
    pub fn parse(kind: ValueKind, raw: &str) -> Result<Value, DomainError> {
        let invalid = |what: &str| DomainError::ValidationError(format!("Invalid {}: {}", what, raw));
        match kind {
            ValueKind::Int => raw.trim().parse().map(Value::Int).map_err(|_| invalid("integer")),
            ValueKind::Real => raw.trim().parse().map(Value::Real).map_err(|_| invalid("number")),
            ValueKind::Bool => match raw.trim().to_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(invalid("boolean")),
            },
            ValueKind::Text => Ok(Value::Text(raw.to_string())),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
        }
    }
}

#[doc(hidden)]
pub fn mismatch(expected: &str, found: &Value) -> DomainError {
    DomainError::InternalError(format!(
        "Expected {} column value, found {}",
        expected,
        found.describe()
    ))
}

/// A Rust type that can live in a [`Column`].
pub trait FieldType: Sized {
    const KIND: ValueKind;
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;
    fn from_value(value: Value) -> Result<Self, DomainError>;
}

impl FieldType for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Int(v) => Ok(v),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl FieldType for f64 {
    const KIND: ValueKind = ValueKind::Real;

    fn to_value(&self) -> Value {
        Value::Real(*self)
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Real(v) => Ok(v),
            // SQLite hands back whole REAL values as integers
            Value::Int(v) => Ok(v as f64),
            other => Err(mismatch("real", &other)),
        }
    }
}

impl FieldType for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(mismatch("text", &other)),
        }
    }
}

impl FieldType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::Int(v) => Ok(v != 0),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl FieldType for NaiveDate {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.format(DATE_FORMAT).to_string())
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Text(v) => NaiveDate::parse_from_str(&v, DATE_FORMAT)
                .map_err(|e| DomainError::InternalError(format!("Invalid stored date {}: {}", v, e))),
            other => Err(mismatch("date", &other)),
        }
    }
}

impl FieldType for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::Text;

    /// Fixed-width RFC 3339 so text ordering matches time ordering.
    fn to_value(&self) -> Value {
        Value::Text(self.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Text(v) => DateTime::parse_from_rfc3339(&v)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| DomainError::InternalError(format!("Invalid stored timestamp {}: {}", v, e))),
            other => Err(mismatch("timestamp", &other)),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        v.to_value()
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        v.to_value()
    }
}

/// Pulls the next column value out of a row and converts it.
pub fn take<T: FieldType>(
    values: &mut impl Iterator<Item = Value>,
    column: &'static str,
) -> Result<T, DomainError> {
    let value = values
        .next()
        .ok_or_else(|| DomainError::InternalError(format!("Missing value for column {}", column)))?;
    T::from_value(value)
        .map_err(|e| DomainError::InternalError(format!("Column {}: {}", column, e)))
}

/// Implements `FieldType` for a fieldless enum stored as text, plus
/// `as_str` / `parse` helpers.
#[macro_export]
macro_rules! text_enum {
    ($ty:ident { $( $variant:ident => $text:literal ),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $ty::$variant => $text, )+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s.to_lowercase().as_str() {
                    $( $text => Some($ty::$variant), )+
                    _ => None,
                }
            }
        }

        impl $crate::repositories::FieldType for $ty {
            const KIND: $crate::repositories::ValueKind = $crate::repositories::ValueKind::Text;

            fn to_value(&self) -> $crate::repositories::Value {
                $crate::repositories::Value::Text(self.as_str().to_string())
            }

            fn from_value(
                value: $crate::repositories::Value,
            ) -> Result<Self, $crate::error::DomainError> {
                match value {
                    $crate::repositories::Value::Text(s) => $ty::parse(&s).ok_or_else(|| {
                        $crate::error::DomainError::InternalError(format!(
                            "Unknown {} value: {}",
                            stringify!($ty),
                            s
                        ))
                    }),
                    other => Err($crate::repositories::value::mismatch(stringify!($ty), &other)),
                }
            }
        }

        impl From<$ty> for $crate::repositories::Value {
            fn from(v: $ty) -> Self {
                $crate::repositories::Value::Text(v.as_str().to_string())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_follows_sql_null_rules() {
        assert_eq!(Value::Int(1).compare(&Value::Int(2)), Some(Ordering::Less));
        assert_eq!(Value::Int(2).compare(&Value::Real(1.5)), Some(Ordering::Greater));
        assert_eq!(Value::Null.compare(&Value::Null), None);
        assert_eq!(Value::Text("a".into()).compare(&Value::Int(1)), None);
    }

    #[test]
    fn test_timestamps_sort_as_text() {
        let early = DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z").unwrap().with_timezone(&Utc);
        let late = DateTime::parse_from_rfc3339("2024-05-01T08:00:00.5Z").unwrap().with_timezone(&Utc);
        assert_eq!(early.to_value().compare(&late.to_value()), Some(Ordering::Less));
        assert_eq!(DateTime::<Utc>::from_value(late.to_value()).unwrap(), late);
    }

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(Value::parse(ValueKind::Int, " 42").unwrap(), Value::Int(42));
        assert_eq!(Value::parse(ValueKind::Bool, "FALSE").unwrap(), Value::Bool(false));
        assert_eq!(Value::parse(ValueKind::Text, "A-12").unwrap(), Value::Text("A-12".into()));
        assert!(matches!(
            Value::parse(ValueKind::Real, "big"),
            Err(DomainError::ValidationError(msg)) if msg == "Invalid number: big"
        ));
    }

    #[test]
    fn test_optional_date_round_trip_through_null() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Some(date).to_value(), Value::Text("2024-02-29".into()));
        assert_eq!(Option::<NaiveDate>::from_value(Value::Null).unwrap(), None);
        assert!(NaiveDate::from_value(Value::Int(3)).is_err());
    }
}
