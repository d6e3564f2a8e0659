//! Axum route handler for the chat relay.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::relay::relay;
use crate::errors::AppError;
use crate::state::AppState;

/// `message` is kept loose so a wrongly typed value can be told apart from a
/// missing one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat
///
/// A body that is not JSON, or a `message` that is present but not a string,
/// fails like any other relay error (500). An absent, null or empty message
/// is a 400.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = body.map_err(|rejection| AppError::Malformed(rejection.body_text()))?;

    let message = match req.message {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => {
            return Err(AppError::Malformed(format!(
                "message must be a string, got {other}"
            )))
        }
    };

    let reply = relay(state.llm.as_ref(), message.as_deref()).await?;
    Ok(Json(ChatResponse { reply }))
}
