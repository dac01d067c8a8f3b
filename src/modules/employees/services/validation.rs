// Payload validation for employee create and update requests.
//
// Pure functions: the first violated rule produces the error, nothing is
// persisted or mutated. Update payloads are partial, so only supplied
// fields are checked.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::employees::models::{
    CreateEmployeeRequest, UpdateEmployeeRequest, MAX_EMAIL_LEN, MAX_NAME_LEN,
};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// ASCII letters/digits/`+_.-` before the `@`, letters/digits/`.-` after
pub fn is_valid_email(email: &str) -> bool {
    let pattern = EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern is valid")
    });
    pattern.is_match(email)
}

fn check_name(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", label)));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{} cannot exceed {} characters",
            label, MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<()> {
    if !is_valid_email(email) {
        return Err(AppError::validation("Invalid email address"));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(AppError::validation(format!(
            "Email cannot exceed {} characters",
            MAX_EMAIL_LEN
        )));
    }
    Ok(())
}

fn check_salary(salary: Decimal) -> Result<()> {
    if salary < Decimal::ZERO {
        return Err(AppError::validation("Salary cannot be negative"));
    }
    Ok(())
}

/// Validate a creation payload: names and email are required.
pub fn validate_create(request: &CreateEmployeeRequest) -> Result<()> {
    check_name(&request.first_name, "First name")?;
    check_name(&request.last_name, "Last name")?;
    check_email(&request.email)?;
    if let Some(salary) = request.salary {
        check_salary(salary)?;
    }
    Ok(())
}

/// Validate a partial-update payload: only supplied fields are checked.
pub fn validate_update(details: &UpdateEmployeeRequest) -> Result<()> {
    if let Some(first_name) = &details.first_name {
        check_name(first_name, "First name")?;
    }
    if let Some(last_name) = &details.last_name {
        check_name(last_name, "Last name")?;
    }
    if let Some(email) = &details.email {
        check_email(email)?;
    }
    if let Some(salary) = details.salary {
        check_salary(salary)?;
    }
    Ok(())
}
