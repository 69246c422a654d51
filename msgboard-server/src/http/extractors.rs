//! Custom Axum extractors
//!
//! Boundary validation happens here, so handlers only ever pass
//! well-formed ids and validated drafts to the service.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use msgboard_core::models::{MessageDraft, MessageInput, ValidationError};
use super::error::ApiError;

/// Extract and validate a message UUID from path
#[derive(Debug, Clone, Copy)]
pub struct MessageId(pub Uuid);

impl<S> FromRequestParts<S> for MessageId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::InvalidId { value: String::new() })?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            tracing::debug!(%id, "rejecting malformed message id");
            ValidationError::InvalidId { value: id.clone() }
        })?;

        Ok(Self(uuid))
    }
}

/// JSON body with rejections mapped onto [`ApiError`]
///
/// A non-JSON content type becomes 415; anything else that fails to
/// parse becomes a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(ApiError::UnsupportedMediaType),
            Err(rejection) => Err(ApiError::MalformedBody {
                message: rejection.body_text(),
            }),
        }
    }
}

/// Message payload that passed the non-empty checks
#[derive(Debug, Clone)]
pub struct ValidMessage(pub MessageDraft);

impl<S> FromRequest<S> for ValidMessage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(input) = JsonBody::<MessageInput>::from_request(req, state).await?;
        let draft = input.validate()?;
        Ok(Self(draft))
    }
}
