//! In-memory fakes for the provider and the Content Service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{Config, DEFAULT_MODEL};
use crate::content::models::{Collection, ContactSubmission, Record};
use crate::content::{ContentError, ContentStore};
use crate::llm_client::{ChatCompletion, ChatMessage, LlmError};
use crate::page::PageRenderer;
use crate::state::AppState;

type ErrorFactory<E> = Box<dyn Fn() -> E + Send + Sync>;

/// Records every exchange it receives and answers with a canned reply.
pub struct FakeProvider {
    reply: Option<String>,
    error: Option<ErrorFactory<LlmError>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            reply: None,
            error: Some(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for FakeProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match (&self.reply, &self.error) {
            (Some(reply), _) => Ok(reply.clone()),
            (None, Some(error)) => Err(error()),
            (None, None) => Err(LlmError::EmptyContent),
        }
    }
}

/// Serves fixed rows per collection and records contact inserts.
#[derive(Default)]
pub struct FakeStore {
    pub projects: Vec<Record>,
    pub experiences: Vec<Record>,
    pub resources: Vec<Record>,
    pub failing: Vec<Collection>,
    pub reject_writes: bool,
    pub inserted: Mutex<Vec<ContactSubmission>>,
}

impl FakeStore {
    pub fn inserted(&self) -> Vec<ContactSubmission> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Record>, ContentError> {
        if self.failing.contains(&collection) {
            return Err(ContentError::Api {
                status: 500,
                message: format!("{} unavailable", collection.table()),
            });
        }
        Ok(match collection {
            Collection::Projects => self.projects.clone(),
            Collection::Experiences => self.experiences.clone(),
            Collection::Resources => self.resources.clone(),
        })
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), ContentError> {
        if self.reject_writes {
            return Err(ContentError::Api {
                status: 401,
                message: "new row violates row-level security policy".into(),
            });
        }
        self.inserted.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

pub fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).unwrap()
}

pub fn test_config() -> Config {
    Config {
        llm_base_url: None,
        llm_api_key: None,
        llm_model: DEFAULT_MODEL.to_string(),
        supabase_url: None,
        supabase_anon_key: None,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(llm: Arc<dyn ChatCompletion>, store: Arc<FakeStore>) -> AppState {
    AppState {
        llm,
        content: store,
        pages: Arc::new(PageRenderer::new().unwrap()),
        config: test_config(),
    }
}
