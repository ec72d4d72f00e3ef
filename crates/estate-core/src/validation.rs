//! DTO validation helpers
//!
//! Rules are declared on the DTOs with `validator` attributes; this module
//! holds the shared patterns and turns `ValidationErrors` into a single
//! user-facing message.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::DomainError;

/// Digits with an optional leading `+`, 8 to 15 long.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern compiles"));

/// Block letter(s) and number, e.g. `12`, `A-12`, `B2-0401`.
pub static APARTMENT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{1,4}(-[A-Za-z0-9]{1,4})?$").expect("apartment number pattern compiles")
});

/// Key `validator` files struct-level (schema) errors under.
const SCHEMA_KEY: &str = "__all__";

/// Runs the DTO's rules and maps failures to `DomainError::ValidationError`.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), DomainError> {
    dto.validate()
        .map_err(|errors| DomainError::ValidationError(describe(&errors)))
}

/// `field: message` pairs sorted by field, joined with `; `.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                if field == SCHEMA_KEY {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Builds an error for struct-level (cross-field) rules.
pub fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
