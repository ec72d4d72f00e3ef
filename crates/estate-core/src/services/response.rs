//! Response envelope returned by every service call.

use serde::Serialize;
use tracing::warn;

use crate::error::DomainError;

/// Why a call failed. Not serialized; the HTTP layer maps it to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Validation,
    Conflict,
    Storage,
}

impl From<&DomainError> for FailureKind {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::NotFound { .. } => FailureKind::NotFound,
            DomainError::ValidationError(_) => FailureKind::Validation,
            DomainError::Conflict(_) => FailureKind::Conflict,
            DomainError::DatabaseError(_) | DomainError::InternalError(_) => FailureKind::Storage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            failure: None,
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(kind = ?kind, "Service call failed: {}", message);
        Self {
            success: false,
            message,
            data: None,
            failure: Some(kind),
        }
    }

    /// Wraps a result: `message` on success, the error text on failure.
    pub fn from_result(result: Result<T, DomainError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::ok(data, message),
            Err(error) => error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        ServiceResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            failure: self.failure,
        }
    }
}

impl<T> From<DomainError> for ServiceResponse<T> {
    fn from(error: DomainError) -> Self {
        Self::failure(FailureKind::from(&error), error.to_string())
    }
}
