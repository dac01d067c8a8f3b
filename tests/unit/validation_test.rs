// Payload validation rules: required names, email shape, salary sign.
//
// Uses proptest for the properties that hold across whole input classes and
// plain cases for the fixed examples.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use staffhub::core::AppError;
use staffhub::modules::employees::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use staffhub::modules::employees::services::validation::{
    is_valid_email, validate_create, validate_update,
};

fn valid_create() -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone_number: None,
        position: None,
        salary: Some(dec!(75000.0)),
        manager_id: None,
    }
}

#[test]
fn test_valid_payload_passes() {
    assert!(validate_create(&valid_create()).is_ok());
}

#[test]
fn test_email_examples() {
    assert!(is_valid_email("a.b@example.com"));
    assert!(is_valid_email("user+tag@sub.domain.org"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("two@@example.com"));
    assert!(!is_valid_email("spaces in@example.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
}

#[test]
fn test_blank_first_name_rejected() {
    let mut request = valid_create();
    request.first_name = "   ".to_string();
    assert!(matches!(
        validate_create(&request),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_blank_last_name_rejected() {
    let mut request = valid_create();
    request.last_name = String::new();
    assert!(matches!(
        validate_create(&request),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_overlong_name_rejected() {
    let mut request = valid_create();
    request.first_name = "x".repeat(51);
    assert!(validate_create(&request).is_err());

    request.first_name = "x".repeat(50);
    assert!(validate_create(&request).is_ok());
}

#[test]
fn test_name_limit_counts_characters_not_bytes() {
    // 26 accented chars are 52 UTF-8 bytes but well within the 50-char limit
    let mut request = valid_create();
    request.first_name = "é".repeat(26);
    assert!(validate_create(&request).is_ok());

    request.first_name = "é".repeat(51);
    assert!(validate_create(&request).is_err());

    request.first_name = valid_create().first_name;
    request.last_name = "Müller-Lüdenscheidt".to_string();
    assert!(validate_create(&request).is_ok());
}

#[test]
fn test_overlong_email_rejected() {
    let mut request = valid_create();
    request.email = format!("{}@example.com", "x".repeat(100));
    assert!(validate_create(&request).is_err());
}

#[test]
fn test_salary_boundaries_on_create() {
    let mut request = valid_create();

    request.salary = Some(dec!(-1));
    assert!(matches!(
        validate_create(&request),
        Err(AppError::Validation(_))
    ));

    request.salary = Some(Decimal::ZERO);
    assert!(validate_create(&request).is_ok());

    request.salary = Some(dec!(75000.0));
    assert!(validate_create(&request).is_ok());

    // Salary is optional on create
    request.salary = None;
    assert!(validate_create(&request).is_ok());
}

#[test]
fn test_update_accepts_empty_payload() {
    assert!(validate_update(&UpdateEmployeeRequest::default()).is_ok());
}

#[test]
fn test_update_still_checks_supplied_fields() {
    let details = UpdateEmployeeRequest {
        email: Some("not-an-email".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        validate_update(&details),
        Err(AppError::Validation(_))
    ));

    let details = UpdateEmployeeRequest {
        salary: Some(dec!(-1)),
        ..Default::default()
    };
    assert!(matches!(
        validate_update(&details),
        Err(AppError::Validation(_))
    ));

    let details = UpdateEmployeeRequest {
        first_name: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(validate_update(&details).is_err());
}

proptest! {
    #[test]
    fn test_simple_ascii_addresses_are_accepted(
        local in "[A-Za-z0-9]{1,20}",
        domain in "[a-z0-9]{1,15}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_addresses_without_at_sign_are_rejected(
        text in "[A-Za-z0-9.+_-]{1,40}",
    ) {
        prop_assert!(!is_valid_email(&text));
    }

    #[test]
    fn test_non_negative_salaries_pass(salary in 0u64..10_000_000u64) {
        let mut request = valid_create();
        request.salary = Some(Decimal::from(salary));
        prop_assert!(validate_create(&request).is_ok());
    }

    #[test]
    fn test_negative_salaries_fail_on_both_paths(salary in 1u64..10_000_000u64) {
        let negative = -Decimal::from(salary);

        let mut request = valid_create();
        request.salary = Some(negative);
        prop_assert!(validate_create(&request).is_err());

        let details = UpdateEmployeeRequest {
            salary: Some(negative),
            ..Default::default()
        };
        prop_assert!(validate_update(&details).is_err());
    }
}
