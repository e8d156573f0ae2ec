//! Mapping of domain failures onto HTTP responses.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::dto::ErrorResponse;
use crate::domain::DomainError;

impl From<DomainError> for ErrorResponse {
    fn from(e: DomainError) -> Self {
        Self {
            error: e.kind().to_owned(),
            detail: e.to_string(),
        }
    }
}

/// Error returned by calculator handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl ApiError {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self.0 {
            DomainError::DivisionByZero => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::from(self.0))).into_response()
    }
}
