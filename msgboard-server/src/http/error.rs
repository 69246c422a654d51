//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use msgboard_core::models::{ValidationError, ValidationErrors};
use msgboard_core::{ServiceError, StoreError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed field validation (400)
    Validation(ValidationErrors),

    /// Path id is not a UUID (400)
    InvalidId(ValidationError),

    /// Body is not parseable JSON for the expected shape (400)
    MalformedBody { message: String },

    /// Body was not sent as JSON (415, no body)
    UnsupportedMediaType,

    /// Missing record or mismatched identity (404)
    NotFound { message: String },

    /// Store error (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": "Validation error",
                    "errors": errors.messages()
                }),
            ),
            Self::InvalidId(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_id",
                    "message": e.to_string()
                }),
            ),
            Self::MalformedBody { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_body",
                    "message": message
                }),
            ),
            Self::UnsupportedMediaType => {
                return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
            }
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": message
                }),
            ),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        match e {
            e @ ValidationError::InvalidId { .. } => Self::InvalidId(e),
            other => Self::Validation(other.into()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Store(inner) => Self::Store(inner),
            not_found => Self::NotFound {
                message: not_found.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use uuid::Uuid;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_field_list() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::EmptyAuthor);
        let response = ApiError::Validation(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["errors"][0], "usuário não pode estar vazio");
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let err: ApiError = ValidationError::InvalidId { value: "123".into() }.into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "ID inválido");
    }

    #[tokio::test]
    async fn not_found_is_404_with_verbatim_message() {
        let err: ApiError = ServiceError::IdMismatch {
            id: Uuid::nil(),
            payload_id: None,
        }
        .into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["message"],
            "mensagem não apresenta o ID correto"
        );
    }

    #[tokio::test]
    async fn unsupported_media_type_is_415_without_body() {
        let response = ApiError::UnsupportedMediaType.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn store_error_is_500_and_generic() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "password=hunter2");
        let err: ApiError = ServiceError::Store(StoreError::backend(io)).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "an internal error occurred");
    }
}
