//! Envelope-to-HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use estate_core::services::{FailureKind, ServiceResponse};

pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::Conflict => StatusCode::CONFLICT,
        FailureKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A service envelope plus the status to send when it succeeded.
pub struct ApiResponse<T> {
    pub body: ServiceResponse<T>,
    pub success_status: StatusCode,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: ServiceResponse<T>) -> Self {
        Self {
            body,
            success_status: StatusCode::OK,
        }
    }

    pub fn created(body: ServiceResponse<T>) -> Self {
        Self {
            body,
            success_status: StatusCode::CREATED,
        }
    }
}

impl<T> From<ServiceResponse<T>> for ApiResponse<T> {
    fn from(body: ServiceResponse<T>) -> Self {
        Self::ok(body)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = match self.body.failure {
            None => self.success_status,
            Some(kind) => status_for(kind),
        };
        (status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::error::DomainError;

    #[test]
    fn test_statuses() {
        let created = ApiResponse::created(ServiceResponse::ok(1, "Owner created")).into_response();
        assert_eq!(created.status(), StatusCode::CREATED);

        let conflict: ApiResponse<i64> =
            ApiResponse::created(DomainError::Conflict("User already exists".into()).into());
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        assert_eq!(status_for(FailureKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(FailureKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(FailureKind::Storage), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
