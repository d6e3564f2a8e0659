use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::debug;

use crate::chat::relay::relay;
use crate::content::models::ContactSubmission;
use crate::content::submit_contact;
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::page::view::{ContactView, PageView};
use crate::state::AppState;
use crate::widget::{ChatWidget, ContactForm, SendOutcome};

pub const FILL_ALL_FIELDS: &str = "Please fill in your name, email and message.";

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
    /// JSON transcript rendered into the previous page.
    #[serde(default)]
    pub transcript: String,
}

impl ChatForm {
    /// Earlier turns posted back by the page. A missing or unreadable
    /// transcript starts a fresh conversation.
    fn earlier_turns(&self) -> Vec<ChatMessage> {
        if self.transcript.is_empty() {
            return Vec::new();
        }
        serde_json::from_str(&self.transcript).unwrap_or_else(|e| {
            debug!("Discarding unreadable chat transcript: {e}");
            Vec::new()
        })
    }
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = PageView::load(state.content.as_ref()).await;
    Ok(Html(state.pages.render(&view)?))
}

/// POST /chat
///
/// Only the new message is relayed; earlier turns are carried for display.
pub async fn handle_chat_form(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, AppError> {
    let mut widget = ChatWidget::resume(form.earlier_turns());
    widget.set_input(form.message);

    if let Some(message) = widget.begin_send() {
        let outcome = match relay(state.llm.as_ref(), Some(message.as_str())).await {
            Ok(reply) => SendOutcome::Reply(reply),
            Err(e) => {
                e.log();
                SendOutcome::Error(Some(e.public_message()))
            }
        };
        widget.finish_send(outcome);
    }

    let mut view = PageView::load(state.content.as_ref()).await;
    view.set_chat(widget.messages());
    Ok(Html(state.pages.render(&view)?))
}

/// POST /contact
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> Result<Html<String>, AppError> {
    let mut form = ContactForm::new(input.name, input.email, input.message);

    let result = match form.begin_submit() {
        Some(submission) => match submission.check() {
            Ok(()) => submit_contact(state.content.as_ref(), &submission)
                .await
                .map_err(|e| {
                    let err = AppError::Write(e);
                    err.log();
                    err.public_message()
                }),
            Err(msg) => Err(msg),
        },
        None => Err(FILL_ALL_FIELDS.to_string()),
    };
    form.finish_submit(result);

    let mut view = PageView::load(state.content.as_ref()).await;
    view.contact = ContactView::from_form(&form);
    Ok(Html(state.pages.render(&view)?))
}
