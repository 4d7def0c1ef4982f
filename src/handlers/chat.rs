use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Reply;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: Reply,
}

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body counts as missing fields, same as an empty one.
    let Ok(Json(req)) = body else {
        return Err(AppError::MissingFields);
    };

    let (Some(phone), Some(message)) = (
        req.phone.filter(|p| !p.is_empty()),
        req.message.filter(|m| !m.is_empty()),
    ) else {
        return Err(AppError::MissingFields);
    };

    tracing::info!(phone = %phone, message = %message, "incoming chat message");

    let reply = state
        .agent
        .respond(&state.store, &state.config, &phone, &message)?;

    // Best-effort outbound delivery; a send failure never fails the request.
    if let Err(e) = state.messaging.send_message(&phone, &reply.text).await {
        tracing::warn!(error = %e, phone = %phone, "failed to deliver WhatsApp reply");
    }

    Ok(Json(ChatResponse {
        success: true,
        response: reply,
    }))
}
