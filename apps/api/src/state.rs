use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::llm_client::ChatCompletion;
use crate::page::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every client handle here is built once in `main` and passed in explicitly.
#[derive(Clone)]
pub struct AppState {
    /// Chat provider behind the relay. Default: `LlmClient`.
    pub llm: Arc<dyn ChatCompletion>,
    /// Content Service handle. Default: `SupabaseClient`.
    pub content: Arc<dyn ContentStore>,
    pub pages: Arc<PageRenderer>,
    pub config: Config,
}
