//! Contact form domain types
//!
//! The draft is what the visitor is typing, the payload is what goes over
//! the wire to the form relay, and [`SubmissionStatus`] is the banner shown
//! above the form after an attempt.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Banner text after the relay accepted the message
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

/// Banner text after the relay answered but refused the message
pub const REJECTED_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Banner text when the relay could not be reached or answered garbage
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Deliberately loose: one `@`, no whitespace, a dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

/// One of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Input `name`/`id` attribute and JSON key
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }
}

/// In-progress values of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when nothing has been typed into any field
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields that are blank or, for the email, malformed
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| {
                let value = self.get(*f).trim();
                if value.is_empty() {
                    return true;
                }
                *f == ContactField::Email && !EMAIL_REGEX.is_match(value)
            })
            .collect()
    }

    /// Local precondition check run before anything is sent
    pub fn validate(&self) -> Result<()> {
        let fields = self.invalid_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(fields))
        }
    }
}

/// JSON body posted to the form relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Omitted when a proxy in front of the relay supplies the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Build the wire body from trimmed field values. An empty key is
    /// treated as absent.
    pub fn from_draft(draft: &ContactDraft, access_key: Option<&str>) -> Self {
        Self {
            access_key: access_key
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            message: draft.message.trim().to_string(),
        }
    }
}

/// Result of the most recent submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Success(_) | SubmissionStatus::Failure(_)
        )
    }

    /// Text for the banner, if one should be shown
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(msg) | SubmissionStatus::Failure(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }

    /// Modifier class for the banner (`submit-message success`)
    pub fn banner_class(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success(_) => Some("success"),
            SubmissionStatus::Failure(_) => Some("error"),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }
}

/// Banner text for a draft that failed the local check
pub fn validation_message(fields: &[ContactField]) -> String {
    let labels = fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Please check the following fields and try again: {labels}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ContactDraft {
        ContactDraft::new(
            "Asha Rao",
            "asha@example.com",
            "Quote",
            "We need a new storefront.",
        )
    }

    #[test]
    fn test_set_and_get_each_field() {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Subject, "Hello");
        assert_eq!(draft.get(ContactField::Subject), "Hello");
        assert_eq!(draft.subject, "Hello");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_clear_empties_all_fields() {
        let mut draft = complete_draft();
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_invalid() {
        let mut draft = complete_draft();
        draft.name = "   ".into();
        draft.message.clear();

        assert_eq!(
            draft.invalid_fields(),
            vec![ContactField::Name, ContactField::Message]
        );
        assert!(matches!(
            draft.validate(),
            Err(Error::Validation { fields }) if fields.len() == 2
        ));
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        for bad in ["asha", "asha@", "@example.com", "asha@example", "a b@example.com"] {
            let mut draft = complete_draft();
            draft.email = bad.into();
            assert_eq!(draft.invalid_fields(), vec![ContactField::Email], "{bad}");
        }
    }

    #[test]
    fn test_email_with_surrounding_whitespace_is_accepted() {
        let mut draft = complete_draft();
        draft.email = " asha@example.co.in ".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_payload_serializes_all_fields() {
        let payload = ContactPayload::from_draft(&complete_draft(), Some("key-123"));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["access_key"], "key-123");
        assert_eq!(json["name"], "Asha Rao");
        assert_eq!(json["email"], "asha@example.com");
        assert_eq!(json["subject"], "Quote");
        assert_eq!(json["message"], "We need a new storefront.");
    }

    #[test]
    fn test_payload_sends_trimmed_values() {
        let draft = ContactDraft::new(
            "  Asha Rao ",
            " asha@example.co.in ",
            "Quote\n",
            "\n  Line one\n  Line two\n",
        );
        assert!(draft.validate().is_ok());

        let payload = ContactPayload::from_draft(&draft, None);
        assert_eq!(payload.name, "Asha Rao");
        assert_eq!(payload.email, "asha@example.co.in");
        assert_eq!(payload.subject, "Quote");
        assert_eq!(payload.message, "Line one\n  Line two");
    }

    #[test]
    fn test_payload_omits_missing_or_blank_key() {
        for key in [None, Some(""), Some("  ")] {
            let payload = ContactPayload::from_draft(&complete_draft(), key);
            let json = serde_json::to_value(&payload).unwrap();
            assert!(json.get("access_key").is_none());
        }
    }

    #[test]
    fn test_status_banner() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Pending.banner_class(), None);

        let ok = SubmissionStatus::Success(SUCCESS_MESSAGE.into());
        assert_eq!(ok.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(ok.banner_class(), Some("success"));
        assert!(ok.is_resolved());

        let err = SubmissionStatus::Failure(REJECTED_MESSAGE.into());
        assert_eq!(err.banner_class(), Some("error"));
        assert!(!err.is_pending());
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        assert_ne!(REJECTED_MESSAGE, NETWORK_ERROR_MESSAGE);
        assert!(!SUCCESS_MESSAGE.is_empty());
    }

    #[test]
    fn test_validation_message_lists_labels() {
        let msg = validation_message(&[ContactField::Email]);
        assert!(msg.contains("Email Address"));
    }
}
