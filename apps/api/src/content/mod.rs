//! Content Service access: the three display reads and the contact write.

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod handlers;
pub mod models;

use models::{Collection, ContactSubmission, Record};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content service not configured: {0} is not set")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

/// Shown in place of a section when the Content Service cannot be reached.
pub const CONTENT_UNAVAILABLE: &str = "Content is unavailable right now.";

impl ContentError {
    /// Text safe to render for a failed read: the service's own message for a
    /// rejected query, a fixed line otherwise. Request URLs never appear here.
    pub fn public_message(&self) -> String {
        match self {
            ContentError::Api { message, .. } => message.clone(),
            ContentError::NotConfigured(_) | ContentError::Http(_) => {
                CONTENT_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Read/write access to the hosted record sets.
///
/// Carried in `AppState` as `Arc<dyn ContentStore>`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All rows of `collection`, ordered by `id` in the collection's direction.
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Record>, ContentError>;

    /// Inserts exactly one row into the contact table.
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), ContentError>;
}

pub async fn list_projects(store: &dyn ContentStore) -> Result<Vec<Record>, ContentError> {
    store.fetch_rows(Collection::Projects).await
}

pub async fn list_experiences(store: &dyn ContentStore) -> Result<Vec<Record>, ContentError> {
    store.fetch_rows(Collection::Experiences).await
}

pub async fn list_resources(store: &dyn ContentStore) -> Result<Vec<Record>, ContentError> {
    store.fetch_rows(Collection::Resources).await
}

/// Writes one contact submission. There is no idempotency key, so a retried
/// call writes a second row.
pub async fn submit_contact(
    store: &dyn ContentStore,
    submission: &ContactSubmission,
) -> Result<(), ContentError> {
    store.insert_contact(submission).await
}
