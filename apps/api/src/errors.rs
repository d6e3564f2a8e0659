use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::ContentError;
use crate::llm_client::LlmError;

/// Body returned when the chat provider fails, whatever the cause.
pub const UPSTREAM_HINT: &str =
    "Erreur lors de la génération de réponse (vérifiez la clé du fournisseur ou les limites)";

/// Alert shown when a contact submission could not be written.
pub const WRITE_FAILED: &str = "Error sending message. Please try again later.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every response body has the shape `{ "error": string }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A request body the relay could not read at all.
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Content query error: {0}")]
    Query(ContentError),

    #[error("Content write error: {0}")]
    Write(ContentError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Malformed(_) | AppError::Upstream(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Query(_) | AppError::Write(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Text safe to show the caller. Upstream detail never appears here.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingInput(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Malformed(_) | AppError::Upstream(_) => UPSTREAM_HINT.to_string(),
            AppError::Query(e) => e.public_message(),
            AppError::Write(_) => WRITE_FAILED.to_string(),
            AppError::Template(_) => "An internal server error occurred".to_string(),
        }
    }

    pub fn log(&self) {
        match self {
            AppError::MissingInput(_) | AppError::Validation(_) => {}
            AppError::Malformed(detail) => tracing::error!("Malformed chat request: {detail}"),
            AppError::Upstream(e) => tracing::error!("LLM error: {e}"),
            AppError::Query(e) => tracing::error!("Content query error: {e}"),
            AppError::Write(e) => tracing::error!("Content write error: {e}"),
            AppError::Template(e) => tracing::error!("Template error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}
