//! Student record model and field validation.
//!
//! # Responsibility
//! - Define the canonical student record shape shared by store and views.
//! - Provide pure validation over raw text input.
//!
//! # Invariants
//! - `id` is a non-empty digits-only string supplied by the user.
//! - `name` contains letters and spaces only.
//! - `contact` is exactly 10 digits.
//! - `class` and `address` are optional free text; empty means "not given".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("id pattern must compile"));
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern must compile"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w-]+(\.[\w-]+)*@([\w-]+\.)+[A-Za-z]{2,7}$")
        .expect("email pattern must compile")
});
static CONTACT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("contact pattern must compile"));

/// Validation failure for one student form submission.
///
/// Display text doubles as the user-facing notice, so messages stay in the
/// imperative voice of the form UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    /// A required field was empty after trimming.
    MissingField(&'static str),
    /// Student id contained something other than digits.
    NonNumericId(String),
    /// Name contained characters outside letters and spaces.
    NonAlphabeticName(String),
    /// Email did not match the `local@domain.tld` pattern.
    MalformedEmail(String),
    /// Contact number was not exactly 10 digits.
    BadContactNumber(String),
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "please fill in all required fields (missing `{field}`)")
            }
            Self::NonNumericId(value) => {
                write!(f, "student id must contain only numbers, got `{value}`")
            }
            Self::NonAlphabeticName(value) => {
                write!(f, "student name must contain only letters, got `{value}`")
            }
            Self::MalformedEmail(value) => {
                write!(f, "please enter a valid email address, got `{value}`")
            }
            Self::BadContactNumber(value) => {
                write!(f, "contact number must be 10 digits, got `{value}`")
            }
        }
    }
}

impl Error for StudentValidationError {}

/// Raw, untrimmed text collected from the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub class: String,
    pub address: String,
}

/// Canonical student record.
///
/// All fields are text-valued on the wire; `class` and `address` keep an
/// empty string when the user left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// User-supplied numeric id, unique across the record list.
    pub id: String,
    /// Full name, letters and spaces only.
    pub name: String,
    /// Contact email, `local@domain.tld`.
    pub email: String,
    /// Phone number, exactly 10 digits.
    pub contact: String,
    /// Optional class label, free text.
    #[serde(default)]
    pub class: String,
    /// Optional postal address, free text, never format-checked.
    #[serde(default)]
    pub address: String,
}

impl Student {
    /// Builds a validated record from raw form input.
    ///
    /// All fields are trimmed first; required fields are checked for
    /// presence before their format rules run, so the "missing field"
    /// notice wins over format notices.
    pub fn from_input(input: &FormInput) -> Result<Self, StudentValidationError> {
        let student = Self {
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            contact: input.contact.trim().to_string(),
            class: input.class.trim().to_string(),
            address: input.address.trim().to_string(),
        };
        student.validate()?;
        Ok(student)
    }

    /// Checks all field rules without mutating anything.
    ///
    /// Write paths call this again before persistence, so records built
    /// directly (tests, imports) face the same rules as form input.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("email", &self.email),
            ("contact", &self.contact),
        ] {
            if value.is_empty() {
                return Err(StudentValidationError::MissingField(field));
            }
        }

        if !ID_PATTERN.is_match(&self.id) {
            return Err(StudentValidationError::NonNumericId(self.id.clone()));
        }
        if !NAME_PATTERN.is_match(&self.name) {
            return Err(StudentValidationError::NonAlphabeticName(self.name.clone()));
        }
        if !is_well_formed_email(&self.email) {
            return Err(StudentValidationError::MalformedEmail(self.email.clone()));
        }
        if !CONTACT_PATTERN.is_match(&self.contact) {
            return Err(StudentValidationError::BadContactNumber(
                self.contact.clone(),
            ));
        }

        Ok(())
    }

    /// Returns the class label, or `-` when the field was left blank.
    pub fn class_or_dash(&self) -> &str {
        if self.class.is_empty() {
            "-"
        } else {
            &self.class
        }
    }
}

/// Shared email check used by the registration and contact forms.
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
