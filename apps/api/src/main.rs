mod chat;
mod config;
mod content;
mod errors;
mod llm_client;
mod page;
mod routes;
mod state;
mod widget;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::client::SupabaseClient;
use crate::llm_client::LlmClient;
use crate::page::PageRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Missing provider or content settings are reported here but only fail
    // the calls that need them.
    if config.llm_base_url.is_none() || config.llm_api_key.is_none() {
        warn!("LLM_BASE_URL or LLM_API_KEY not set; /api/chat will fail until configured");
    }
    if config.supabase_url.is_none() || config.supabase_anon_key.is_none() {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set; content reads and writes will fail");
    }

    let llm = LlmClient::new(
        config.llm_base_url.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    let content = SupabaseClient::new(config.supabase_url.clone(), config.supabase_anon_key.clone());
    info!("Content Service client initialized");

    let pages = PageRenderer::new()?;

    let state = AppState {
        llm: Arc::new(llm),
        content: Arc::new(content),
        pages: Arc::new(pages),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
