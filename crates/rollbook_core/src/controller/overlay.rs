//! Static informational overlays and the contact feedback form.
//!
//! # Responsibility
//! - Provide fixed title/body content for privacy, terms, and contact.
//! - Validate contact form input with the same email rule as registration.
//!
//! # Invariants
//! - Contact submissions never leave the process; they are logged and
//!   dropped.

use crate::model::student::is_well_formed_email;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Confirmation shown after a successful contact submission.
pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message! We will get back to you soon.";

/// The three informational overlays reachable from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Privacy,
    Terms,
    Contact,
}

/// Renderable overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub kind: OverlayKind,
    pub title: &'static str,
    pub body: &'static str,
    /// Only the contact overlay hosts a form.
    pub has_contact_form: bool,
}

/// Returns the fixed content for one overlay.
pub fn overlay_view(kind: OverlayKind) -> OverlayView {
    match kind {
        OverlayKind::Privacy => OverlayView {
            kind,
            title: "Privacy Policy",
            body: "Student records are stored only on this device. \
                   No data is transmitted to any server or shared with \
                   third parties.",
            has_contact_form: false,
        },
        OverlayKind::Terms => OverlayView {
            kind,
            title: "Terms of Service",
            body: "This tool is provided as-is for managing local student \
                   records. You are responsible for the accuracy of the \
                   data you enter and for local backups.",
            has_contact_form: false,
        },
        OverlayKind::Contact => OverlayView {
            kind,
            title: "Contact Us",
            body: "Send us your questions or feedback using the form below.",
            has_contact_form: true,
        },
    }
}

/// Raw contact form fields; `subject` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validation failure for the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    /// A required field was empty after trimming.
    MissingField(&'static str),
    MalformedEmail(String),
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "please fill in all required fields (missing `{field}`)")
            }
            Self::MalformedEmail(value) => {
                write!(f, "please enter a valid email address, got `{value}`")
            }
        }
    }
}

impl Error for ContactFormError {}

/// Validates and trims a contact submission, then records it locally.
///
/// Returns the confirmation text to show the user. There is no network
/// transmission; the message is logged and dropped.
pub fn submit_contact(input: &ContactInput) -> Result<&'static str, ContactFormError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let subject = input.subject.trim();
    let message = input.message.trim();

    for (field, value) in [("name", name), ("email", email), ("message", message)] {
        if value.is_empty() {
            return Err(ContactFormError::MissingField(field));
        }
    }
    if !is_well_formed_email(email) {
        return Err(ContactFormError::MalformedEmail(email.to_string()));
    }

    info!(
        "event=contact_submitted module=overlay status=ok name={name} subject_len={} message_len={}",
        subject.len(),
        message.len()
    );
    Ok(CONTACT_CONFIRMATION)
}
