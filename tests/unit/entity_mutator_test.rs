// Null-safe partial update semantics: supplied fields move, absent fields
// stay, and re-applying the same payload changes nothing further.

use rust_decimal_macros::dec;

use staffhub::modules::employees::models::{Employee, UpdateEmployeeRequest};
use staffhub::modules::employees::services::mutation::apply_update;

fn stored_employee() -> Employee {
    Employee {
        id: 1,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone_number: Some("555-0100".to_string()),
        position: Some("Engineer".to_string()),
        salary: Some(dec!(75000.0)),
        manager_id: None,
        version: 3,
    }
}

#[test]
fn test_absent_fields_are_untouched() {
    let mut employee = stored_employee();
    let details = UpdateEmployeeRequest {
        position: Some("Lead Engineer".to_string()),
        ..Default::default()
    };

    apply_update(&mut employee, &details);

    assert_eq!(employee.position.as_deref(), Some("Lead Engineer"));
    assert_eq!(employee.email, "john.doe@example.com");
    assert_eq!(employee.salary, Some(dec!(75000.0)));
    assert_eq!(employee.first_name, "John");
    assert_eq!(employee.phone_number.as_deref(), Some("555-0100"));
}

#[test]
fn test_all_fields_move_when_supplied() {
    let mut employee = stored_employee();
    let details = UpdateEmployeeRequest {
        first_name: Some("Jane".to_string()),
        last_name: Some("Smith".to_string()),
        email: Some("jane.smith@example.com".to_string()),
        phone_number: Some("555-0199".to_string()),
        position: Some("Manager".to_string()),
        salary: Some(dec!(90000)),
        manager_id: Some(7),
    };

    apply_update(&mut employee, &details);

    assert_eq!(employee.first_name, "Jane");
    assert_eq!(employee.last_name, "Smith");
    assert_eq!(employee.email, "jane.smith@example.com");
    assert_eq!(employee.phone_number.as_deref(), Some("555-0199"));
    assert_eq!(employee.position.as_deref(), Some("Manager"));
    assert_eq!(employee.salary, Some(dec!(90000)));
    assert_eq!(employee.manager_id, Some(7));
    assert_eq!(employee.full_name(), "Jane Smith");
}

#[test]
fn test_empty_payload_is_a_no_op() {
    let mut employee = stored_employee();
    let before = employee.clone();

    apply_update(&mut employee, &UpdateEmployeeRequest::default());

    assert_eq!(employee, before);
}

#[test]
fn test_partial_update_is_idempotent() {
    let details = UpdateEmployeeRequest {
        position: Some("Lead Engineer".to_string()),
        salary: Some(dec!(85000)),
        ..Default::default()
    };

    let mut once = stored_employee();
    apply_update(&mut once, &details);

    let mut twice = once.clone();
    apply_update(&mut twice, &details);

    assert_eq!(once, twice);
}

#[test]
fn test_update_does_not_clear_manager() {
    let mut employee = stored_employee();
    employee.manager_id = Some(4);

    apply_update(
        &mut employee,
        &UpdateEmployeeRequest {
            salary: Some(dec!(80000)),
            ..Default::default()
        },
    );

    assert_eq!(employee.manager_id, Some(4));
}
