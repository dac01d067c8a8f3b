use crate::modules::employees::models::{Employee, UpdateEmployeeRequest};

/// Null-safe partial update: copy each field from `details` onto `existing`
/// only when it is supplied. Fields absent from the payload keep their
/// stored value. A supplied `manager_id` must already have been resolved
/// against the manager store by the caller.
///
/// Mutates in place; persistence is the caller's job.
pub fn apply_update(existing: &mut Employee, details: &UpdateEmployeeRequest) {
    if let Some(first_name) = &details.first_name {
        existing.first_name = first_name.clone();
    }
    if let Some(last_name) = &details.last_name {
        existing.last_name = last_name.clone();
    }
    if let Some(email) = &details.email {
        existing.email = email.clone();
    }
    if let Some(phone_number) = &details.phone_number {
        existing.phone_number = Some(phone_number.clone());
    }
    if let Some(position) = &details.position {
        existing.position = Some(position.clone());
    }
    if let Some(salary) = details.salary {
        existing.salary = Some(salary);
    }
    if let Some(manager_id) = details.manager_id {
        existing.manager_id = Some(manager_id);
    }
}
