//! Contact-form validation.
//!
//! Every rule is checked so the caller gets all problems at once, joined into
//! one message of the form `<problem> at "<field>"; ...`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::models::NewContactMessage;
use crate::errors::ApiError;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_SUBJECT_CHARS: usize = 3;
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("static regex compile")
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Checks a raw JSON body against the contact-message shape.
///
/// # Errors
///
/// Returns `ApiError::Validation` listing every violated rule.
pub fn validate_contact(body: &Value) -> Result<NewContactMessage, ApiError> {
    let mut issues = Vec::new();

    let name = string_field(body, "name", &mut issues);
    let email = string_field(body, "email", &mut issues);
    let subject = string_field(body, "subject", &mut issues);
    let message = string_field(body, "message", &mut issues);

    if let Some(name) = &name {
        check_min_chars(name, MIN_NAME_CHARS, "name", &mut issues);
    }
    if let Some(email) = &email {
        if !is_valid_email(email) {
            issues.push(r#"Invalid email at "email""#.to_string());
        }
    }
    if let Some(subject) = &subject {
        check_min_chars(subject, MIN_SUBJECT_CHARS, "subject", &mut issues);
    }
    if let Some(message) = &message {
        check_min_chars(message, MIN_MESSAGE_CHARS, "message", &mut issues);
    }

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if issues.is_empty() => {
            Ok(NewContactMessage {
                name,
                email,
                subject,
                message,
            })
        }
        _ => Err(ApiError::Validation(issues.join("; "))),
    }
}

fn string_field(body: &Value, field: &str, issues: &mut Vec<String>) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => {
            issues.push(format!(r#"Required at "{field}""#));
            None
        }
        Some(other) => {
            issues.push(format!(
                r#"Expected string, received {} at "{field}""#,
                json_type_name(other)
            ));
            None
        }
    }
}

fn check_min_chars(value: &str, min: usize, field: &str, issues: &mut Vec<String>) {
    if value.chars().count() < min {
        issues.push(format!(
            r#"String must contain at least {min} character(s) at "{field}""#
        ));
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
