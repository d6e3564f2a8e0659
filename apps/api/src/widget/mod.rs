//! Session state behind the chat widget and the contact form.
//!
//! One request per form may be in flight: the page disables a form's submit
//! button while its post is pending (see `templates/index.html`).

pub mod chat;
pub mod contact;

pub use chat::{ChatWidget, SendOutcome};
pub use contact::{ContactForm, SUCCESS_NOTICE_WINDOW};
