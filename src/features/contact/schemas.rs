use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const PHONE_MIN_LENGTH: usize = 10;

// -- =====================
// -- IN
// -- =====================
#[derive(Deserialize, Serialize, Validate, Default, PartialEq, Eq, Clone, Debug)]
#[serde(default)]
pub struct ContactForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    pub interest: String,
    pub message: String,
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Interest,
    Message,
}

impl ContactField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Interest => "interest",
            Self::Message => "message",
        }
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// At least ten characters, each a digit, space, `-`, `+`, `(` or `)`.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')');
    if value.chars().count() < PHONE_MIN_LENGTH || !value.chars().all(allowed) {
        return Err(ValidationError::new("phone"));
    }
    Ok(())
}

// -- =====================
// -- OUT
// -- =====================
/// What the intake endpoint receives, minus the access key.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
    pub subject: String,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Serialize, Debug)]
pub struct ContactResponse {
    pub status: SubmitStatus,
    pub message: String,
    pub errors: BTreeMap<String, String>,
}
