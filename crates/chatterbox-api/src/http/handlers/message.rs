//! Message CRUD handlers for the REST API.
//!
//! Responses carry the message resource directly as JSON. Creation returns
//! 201; the fan-out to the bot lanes happens inside the service and never
//! influences the response the client sees.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use chatterbox_types::message::{CreateMessageRequest, Message, UpdateMessageRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/messages - Create a message and notify the bots.
pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state.message_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages - List all messages in ascending id order.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.message_service.list().await?;
    Ok(Json(messages))
}

/// GET /api/messages/{id} - Fetch one message; 404 if absent.
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let message = state.message_service.get(id).await?;
    Ok(Json(message))
}

/// PUT /api/messages/{id} - Replace the text; 404 if absent.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let message = state.message_service.update(id, body).await?;
    Ok(Json(message))
}

/// DELETE /api/messages/{id} - Remove permanently; 404 if absent.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.message_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
