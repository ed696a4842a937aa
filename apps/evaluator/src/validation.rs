use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::UserInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Checks profile metadata, returning every problem found.
pub fn check_user_info(info: &UserInfo) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if info.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    }

    if info.email.trim().is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !EMAIL_RE.is_match(&info.email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }

    if info.job_role.trim().is_empty() {
        errors.push(FieldError {
            field: "jobRole",
            message: "Job role is required",
        });
    }

    errors
}

/// Must pass before the engine sees the job role.
pub fn validate_user_info(info: &UserInfo) -> Result<(), AppError> {
    let errors = check_user_info(info);
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
    Err(AppError::Validation(messages.join("; ")))
}
