//! REST client for the Content Service (PostgREST / Supabase dialect).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::content::models::{Collection, ContactSubmission, Record};
use crate::content::{ContentError, ContentStore};

const REST_PREFIX: &str = "/rest/v1";
const CONTACT_TABLE: &str = "contact_messages";

#[derive(Debug, Deserialize)]
struct RestError {
    message: String,
}

/// Long-lived handle to the Content Service.
///
/// Built once in `main` from configuration and handed to whoever issues
/// queries. URL and key are checked per request.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseClient {
    pub fn new(url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            anon_key,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), ContentError> {
        let url = self
            .url
            .as_deref()
            .ok_or(ContentError::NotConfigured("SUPABASE_URL"))?;
        let key = self
            .anon_key
            .as_deref()
            .ok_or(ContentError::NotConfigured("SUPABASE_ANON_KEY"))?;
        Ok((url.trim_end_matches('/'), key))
    }

    fn table_url(base: &str, table: &str) -> String {
        format!("{base}{REST_PREFIX}/{table}")
    }

    async fn error_from(response: reqwest::Response) -> ContentError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RestError>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        ContentError::Api { status, message }
    }
}

#[async_trait]
impl ContentStore for SupabaseClient {
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Record>, ContentError> {
        let (base, key) = self.credentials()?;
        let order = format!("id.{}", collection.order().as_param());

        let response = self
            .client
            .get(Self::table_url(base, collection.table()))
            .query(&[("select", "*"), ("order", order.as_str())])
            .header("apikey", key)
            .bearer_auth(key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        // A `null` body reads as an empty collection.
        let rows: Option<Vec<Record>> = response.json().await?;
        let rows = rows.unwrap_or_default();
        debug!("Fetched {} rows from {}", rows.len(), collection.table());
        Ok(rows)
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), ContentError> {
        let (base, key) = self.credentials()?;

        let response = self
            .client
            .post(Self::table_url(base, CONTACT_TABLE))
            .header("apikey", key)
            .header("Prefer", "return=minimal")
            .bearer_auth(key)
            .json(&[submission])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        debug!("Inserted one row into {CONTACT_TABLE}");
        Ok(())
    }
}
