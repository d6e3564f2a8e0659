//! View models handed to the landing page template.
//!
//! Display defaults live here, not in the content layer: a record missing a
//! status still renders, it just says "Completed".

use chrono::Datelike;
use serde::Serialize;

use crate::content::models::Record;
use crate::content::{list_experiences, list_projects, list_resources, ContentError, ContentStore};
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::widget::{ContactForm, SUCCESS_NOTICE_WINDOW};

pub const DEFAULT_PROJECT_STATUS: &str = "Completed";
pub const DEFAULT_RESOURCE_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub status: String,
    pub link: Option<String>,
}

impl From<&Record> for ProjectCard {
    fn from(record: &Record) -> Self {
        Self {
            title: text_or_empty(record, "title"),
            description: text_or_empty(record, "description"),
            status: record
                .text("status")
                .unwrap_or(DEFAULT_PROJECT_STATUS)
                .to_string(),
            link: record.text("link").map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub role: String,
    pub date: String,
    pub company: String,
    pub details: String,
}

impl From<&Record> for ExperienceItem {
    fn from(record: &Record) -> Self {
        Self {
            role: text_or_empty(record, "role"),
            date: text_or_empty(record, "date"),
            company: text_or_empty(record, "company"),
            details: text_or_empty(record, "details"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceLink {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl From<&Record> for ResourceLink {
    fn from(record: &Record) -> Self {
        Self {
            title: text_or_empty(record, "title"),
            description: text_or_empty(record, "description"),
            link: record
                .text("link")
                .unwrap_or(DEFAULT_RESOURCE_LINK)
                .to_string(),
        }
    }
}

fn text_or_empty(record: &Record, key: &str) -> String {
    record.text(key).unwrap_or_default().to_string()
}

/// One page section: its items, or the inline error that replaced them.
#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Section<T>
where
    T: for<'a> From<&'a Record>,
{
    pub fn from_result(result: Result<Vec<Record>, ContentError>) -> Self {
        match result {
            Ok(rows) => Self {
                items: rows.iter().map(T::from).collect(),
                error: None,
            },
            Err(e) => {
                let err = AppError::Query(e);
                err.log();
                Self {
                    items: Vec::new(),
                    error: Some(err.public_message()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub success: bool,
    pub alert: Option<String>,
}

impl ContactView {
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            success: form.sent(),
            alert: form.alert().map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub experiences: Section<ExperienceItem>,
    pub projects: Section<ProjectCard>,
    pub resources: Section<ResourceLink>,
    pub chat: Vec<ChatMessage>,
    /// `chat` as JSON, posted back by the chat form so the next render keeps
    /// the earlier turns.
    pub chat_transcript: String,
    pub contact: ContactView,
    pub success_notice_secs: u64,
    pub year: i32,
}

impl PageView {
    /// Runs the three reads concurrently; each section fails on its own.
    pub async fn load(store: &dyn ContentStore) -> Self {
        let (experiences, projects, resources) = tokio::join!(
            list_experiences(store),
            list_projects(store),
            list_resources(store),
        );

        Self {
            experiences: Section::from_result(experiences),
            projects: Section::from_result(projects),
            resources: Section::from_result(resources),
            chat: Vec::new(),
            chat_transcript: "[]".to_string(),
            contact: ContactView::default(),
            success_notice_secs: SUCCESS_NOTICE_WINDOW.as_secs(),
            year: chrono::Utc::now().year(),
        }
    }

    pub fn set_chat(&mut self, messages: &[ChatMessage]) {
        self.chat_transcript =
            serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string());
        self.chat = messages.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::Collection;
    use crate::test_support::{record, FakeStore};
    use serde_json::json;

    #[test]
    fn test_project_defaults_applied_at_display() {
        let card = ProjectCard::from(&record(json!({"id": 1, "title": "Insaf Finance"})));
        assert_eq!(card.status, DEFAULT_PROJECT_STATUS);
        assert_eq!(card.link, None);
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_project_status_kept_when_present() {
        let card = ProjectCard::from(&record(json!({"status": "In progress", "link": "https://x.test"})));
        assert_eq!(card.status, "In progress");
        assert_eq!(card.link.as_deref(), Some("https://x.test"));
    }

    #[test]
    fn test_resource_link_defaults_to_anchor() {
        let link = ResourceLink::from(&record(json!({"title": "Guide"})));
        assert_eq!(link.link, DEFAULT_RESOURCE_LINK);
    }

    #[tokio::test]
    async fn test_load_degrades_failed_section_only() {
        let store = FakeStore {
            experiences: vec![record(json!({"id": 1, "role": "Consultant"}))],
            resources: vec![record(json!({"id": 9, "title": "Guide"}))],
            failing: vec![Collection::Projects],
            ..FakeStore::default()
        };

        let view = PageView::load(&store).await;
        assert!(view.projects.items.is_empty());
        assert!(view.projects.error.as_deref().unwrap().contains("projects unavailable"));
        assert_eq!(view.experiences.items[0].role, "Consultant");
        assert!(view.experiences.error.is_none());
        assert_eq!(view.resources.items[0].title, "Guide");
        assert_eq!(view.success_notice_secs, 4);
    }

    #[tokio::test]
    async fn test_set_chat_serializes_transcript() {
        let mut view = PageView::load(&FakeStore::default()).await;
        assert_eq!(view.chat_transcript, "[]");

        view.set_chat(&[ChatMessage::user("Salam"), ChatMessage::assistant("Bonjour")]);
        let back: Vec<ChatMessage> = serde_json::from_str(&view.chat_transcript).unwrap();
        assert_eq!(back, view.chat);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_contact_view_reflects_sent_form() {
        let mut form = ContactForm::new("Amina", "amina@example.com", "Salam");
        form.begin_submit();
        form.finish_submit(Ok(()));
        let view = ContactView::from_form(&form);
        assert!(view.success);
        assert!(view.name.is_empty());
        assert_eq!(view.alert, None);
    }

    #[tokio::test]
    async fn test_load_empty_collections() {
        let view = PageView::load(&FakeStore::default()).await;
        assert!(view.experiences.items.is_empty() && view.experiences.error.is_none());
        assert!(view.projects.items.is_empty() && view.projects.error.is_none());
        assert!(view.resources.items.is_empty() && view.resources.error.is_none());
    }
}
