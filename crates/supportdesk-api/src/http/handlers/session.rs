//! Session HTTP handlers.
//!
//! Endpoints:
//! - POST /new_session               - Create a session
//! - GET  /get_history/{session_id}  - Full message history of a session

use axum::extract::{Path, State};
use axum::Json;
use chrono::SecondsFormat;
use serde::Serialize;

use supportdesk_types::chat::{Message, MessageRole};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
}

/// One history entry as returned to clients.
#[derive(Debug, Serialize)]
pub struct HistoryMessage {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

impl From<Message> for HistoryMessage {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            role: message.role,
            content: message.content,
            timestamp: message.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub messages: Vec<HistoryMessage>,
}

/// POST /new_session
pub async fn new_session(
    State(state): State<AppState>,
) -> Result<Json<NewSessionResponse>, AppError> {
    let session = state.support_service.create_session().await?;
    Ok(Json(NewSessionResponse {
        session_id: session.id,
    }))
}

/// GET /get_history/{session_id}
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let messages = state.support_service.history(&session_id).await?;
    Ok(Json(HistoryResponse {
        session_id,
        messages: messages.into_iter().map(HistoryMessage::from).collect(),
    }))
}
