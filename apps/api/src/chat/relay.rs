//! The chat relay: one user message in, one assistant reply out.
//!
//! Each call walks `Idle -> AwaitingUpstream -> {Replied | Failed}` and keeps
//! nothing afterwards.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::PERSONA_SYSTEM;
use crate::llm_client::{ChatCompletion, ChatMessage};

/// Error text for an absent or empty message.
pub const MISSING_MESSAGE: &str = "Message requis";

/// The exchange sent upstream: persona first, user message verbatim second.
pub fn build_exchange(message: &str) -> [ChatMessage; 2] {
    [
        ChatMessage::system(PERSONA_SYSTEM),
        ChatMessage::user(message),
    ]
}

/// Relays `message` to the provider and returns the first reply.
///
/// An absent or empty message is rejected before any upstream call is made.
/// Anything else, whitespace included, is forwarded as-is.
pub async fn relay(provider: &dyn ChatCompletion, message: Option<&str>) -> Result<String, AppError> {
    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::MissingInput(MISSING_MESSAGE.to_string())),
    };

    debug!("Relaying message ({} chars) to provider", message.chars().count());
    let exchange = build_exchange(message);

    let reply = provider.complete(&exchange).await?;
    info!("Relay replied ({} chars)", reply.chars().count());
    Ok(reply)
}
