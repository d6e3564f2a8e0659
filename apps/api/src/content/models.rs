use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// PostgREST spelling used in `order=id.<dir>`.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// The record sets the landing page reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Projects,
    Experiences,
    Resources,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Experiences => "experiences",
            Collection::Resources => "resources",
        }
    }

    /// Experiences read chronologically; the others newest first.
    pub fn order(self) -> SortOrder {
        match self {
            Collection::Experiences => SortOrder::Ascending,
            Collection::Projects | Collection::Resources => SortOrder::Descending,
        }
    }
}

/// One row from the Content Service, kept verbatim.
///
/// No schema is enforced here; presentation code picks the keys it knows
/// and supplies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// String value at `key`; blank strings count as missing.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// A message left through the contact form. Written once, never read back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email, custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ContactSubmission {
    /// Checks the submission; the error names every offending field.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<String> =
                errors.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort_unstable();
            format!("Invalid contact fields: {}", fields.join(", "))
        })
    }
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
