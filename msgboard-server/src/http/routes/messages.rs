//! Message endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use msgboard_core::models::{Message, Page, PageParams, PageRequest};

use crate::http::error::ApiError;
use crate::http::extractors::{MessageId, ValidMessage};
use crate::http::server::AppState;

/// Plain-text body returned by a successful DELETE
pub const MESSAGE_REMOVED: &str = "mensagem removida";

/// POST /messages - register a new message
async fn create_message(
    State(state): State<Arc<AppState>>,
    ValidMessage(draft): ValidMessage,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = state.service.register_message(draft).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /messages/{id} - fetch one message
async fn get_message(
    State(state): State<Arc<AppState>>,
    MessageId(id): MessageId,
) -> Result<Json<Message>, ApiError> {
    let message = state.service.get_message(id).await?;
    Ok(Json(message))
}

/// PUT /messages/{id} - replace the content of a message
async fn update_message(
    State(state): State<Arc<AppState>>,
    MessageId(id): MessageId,
    ValidMessage(draft): ValidMessage,
) -> Result<Json<Message>, ApiError> {
    let message = state.service.update_message(id, draft).await?;
    Ok(Json(message))
}

/// DELETE /messages/{id} - remove a message
async fn remove_message(
    State(state): State<Arc<AppState>>,
    MessageId(id): MessageId,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.service.remove_message(id).await?;
    Ok((StatusCode::OK, MESSAGE_REMOVED))
}

/// GET /messages?page=&size= - newest-first page of messages
async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Message>>, ApiError> {
    let page = PageRequest::try_from(params)?;
    let result = state.service.list_messages(page).await?;
    Ok(Json(result))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/{id}",
            get(get_message).put(update_message).delete(remove_message),
        )
}
