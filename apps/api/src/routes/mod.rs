pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::content::handlers as content;
use crate::page::handlers as page;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Landing page
        .route("/", get(page::handle_index))
        .route("/chat", post(page::handle_chat_form))
        .route("/contact", post(page::handle_contact_form))
        // Chat relay
        .route("/api/chat", post(chat::handle_chat))
        // Content API
        .route("/api/projects", get(content::handle_list_projects))
        .route("/api/experiences", get(content::handle_list_experiences))
        .route("/api/resources", get(content::handle_list_resources))
        .route("/api/contact", post(content::handle_submit_contact))
        .with_state(state)
}
