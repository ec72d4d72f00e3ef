//! Entity description consumed by the generic repositories.

use crate::error::DomainError;

use super::value::{Column, Value};

/// A persisted record with an integer identity key.
///
/// `COLUMNS` lists every stored field except `id`, in the same order that
/// [`Entity::values`] produces and [`Entity::from_values`] consumes. Implement
/// it with the [`entity!`](crate::entity) macro rather than by hand.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name used in messages ("Apartment").
    const NAME: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];
    /// Columns whose non-null values may appear on at most one row.
    const UNIQUE: &'static [&'static str] = &[];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn values(&self) -> Vec<Value>;
    fn from_values(id: i64, values: Vec<Value>) -> Result<Self, DomainError>;

    fn has_column(name: &str) -> bool {
        name == "id" || Self::COLUMNS.iter().any(|c| c.name == name)
    }

    /// Current value of one column, `None` when the entity has no such column.
    fn field(&self, column: &str) -> Option<Value> {
        if column == "id" {
            return Some(Value::Int(self.id()));
        }
        let index = Self::COLUMNS.iter().position(|c| c.name == column)?;
        self.values().into_iter().nth(index)
    }
}

/// Implements [`Entity`] for a struct with an `id: i64` field.
///
/// ```ignore
/// entity!(Apartment, name = "Apartment", table = "apartments", {
///     building_id: i64 => "buildings",
///     number: String,
/// });
///
/// entity!(User, name = "User", table = "users", unique = ["email"], {
///     email: String,
/// });
/// ```
#[macro_export]
macro_rules! entity {
    (@references) => { None };
    (@references $table:literal) => { Some($table) };
    (
        $ty:ident, name = $name:literal, table = $table:literal,
        $( unique = [ $( $unique:literal ),+ $(,)? ], )?
        {
            $( $field:ident : $fty:ty $( => $references:literal )? ),+ $(,)?
        }
    ) => {
        impl $crate::repositories::Entity for $ty {
            const NAME: &'static str = $name;
            const TABLE: &'static str = $table;
            const UNIQUE: &'static [&'static str] = &[ $( $( $unique ),+ )? ];
            const COLUMNS: &'static [$crate::repositories::Column] = &[
                $(
                    $crate::repositories::Column {
                        name: stringify!($field),
                        kind: <$fty as $crate::repositories::FieldType>::KIND,
                        nullable: <$fty as $crate::repositories::FieldType>::NULLABLE,
                        references: $crate::entity!(@references $( $references )?),
                    },
                )+
            ];

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn values(&self) -> Vec<$crate::repositories::Value> {
                vec![ $( $crate::repositories::FieldType::to_value(&self.$field) ),+ ]
            }

            fn from_values(
                id: i64,
                values: Vec<$crate::repositories::Value>,
            ) -> Result<Self, $crate::error::DomainError> {
                let mut values = values.into_iter();
                Ok(Self {
                    id,
                    $( $field: $crate::repositories::value::take::<$fty>(&mut values, stringify!($field))?, )+
                })
            }
        }
    };
}
