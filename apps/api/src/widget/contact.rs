use std::time::Duration;

use crate::content::models::ContactSubmission;

/// How long the "message sent" notice stays visible. The page enforces it
/// with a CSS animation of this length; the server only decides whether the
/// notice is shown at all.
pub const SUCCESS_NOTICE_WINDOW: Duration = Duration::from_secs(4);

/// Field values and status of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    sent: bool,
    alert: Option<String>,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// True right after a successful write.
    pub fn sent(&self) -> bool {
        self.sent
    }

    /// Starts a submission. `None` when a required field is blank; the form
    /// is left untouched in that case.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        let blank = [&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.trim().is_empty());
        if blank {
            return None;
        }
        self.sent = false;
        self.alert = None;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Success clears every field and raises the notice; failure keeps the
    /// values for a resubmit.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.sent = true;
            }
            Err(alert) => {
                self.sent = false;
                self.alert = Some(alert);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::new("Amina", "amina@example.com", "Salam")
    }

    #[test]
    fn test_success_clears_fields_and_raises_notice() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Amina");
        assert!(!form.sent());

        form.finish_submit(Ok(()));
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(form.sent());
        assert_eq!(form.alert(), None);
    }

    #[test]
    fn test_blank_field_blocks_submit() {
        let mut form = ContactForm::new("Amina", " ", "Salam");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.email, " ");
    }

    #[test]
    fn test_failure_retains_values() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(Err("Error sending message.".into()));
        assert_eq!(form.name, "Amina");
        assert_eq!(form.message, "Salam");
        assert_eq!(form.alert(), Some("Error sending message."));
        assert!(!form.sent());
        assert!(form.begin_submit().is_some());
        assert_eq!(form.alert(), None);
    }
}
