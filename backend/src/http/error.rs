//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::db::repository::RepositoryError;
use crate::validation::FieldError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Rejected fields, for validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        self.fields = fields;
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request parameter
    BadRequest { message: String, details: String },
    /// Body could not be read or decoded as JSON
    InvalidBody(JsonRejection),
    /// Request decoded but failed field validation
    Validation(Vec<FieldError>),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", message).with_details(details),
            ),
            // Keeps axum's status: 413 over the body limit, 415 without a JSON
            // content type, 422 for well-formed JSON of the wrong shape.
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                ApiError::new("BAD_REQUEST", "Invalid request body")
                    .with_details(rejection.body_text()),
            ),
            AppError::Validation(fields) => {
                let details = fields
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("VALIDATION_ERROR", "Invalid Data")
                        .with_details(details)
                        .with_fields(fields),
                )
            }
            AppError::Repository(e) => {
                let (status, code) = match e {
                    RepositoryError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT"),
                    RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    RepositoryError::ConfigurationError { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                let mut body = ApiError::new(code, e.message());
                if let Some(details) = e.context().details.clone() {
                    body = body.with_details(details);
                }
                (status, body)
            }
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), code = %body.code, message = %body.message, "Request failed");
        } else {
            warn!(status = status.as_u16(), code = %body.code, message = %body.message, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(fields: Vec<FieldError>) -> Self {
        AppError::Validation(fields)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ErrorContext;

    async fn status_and_code(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        (status, body.code)
    }

    #[tokio::test]
    async fn test_repository_errors_map_by_variant() {
        let (status, code) = status_and_code(RepositoryError::conflict("taken").into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "CONFLICT");

        let (status, code) = status_and_code(
            RepositoryError::not_found_with_context(
                "nothing here",
                ErrorContext::new("get_bookings_by_date"),
            )
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");

        let (status, code) =
            status_and_code(RepositoryError::configuration("bad").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, code) = status_and_code(
            vec![FieldError::new("class_name", "is missing or invalid")].into(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bad_path_parameter_is_bad_request() {
        let (status, code) =
            status_and_code(AppError::bad_request("Invalid date", "could not parse")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }
}
