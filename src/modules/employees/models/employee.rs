// Employee entity and its request/response DTOs.
//
// An employee optionally reports to a manager. The relationship is held as a
// plain identifier; the reverse collection (a manager's employees) is a query
// view, never a stored back-pointer. `version` backs optimistic locking: the
// store bumps it on every successful update and rejects stale writes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length for first and last names
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length for email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub manager_id: Option<i64>,
    /// Optimistic-lock counter, managed by the persistence layer
    pub version: i64,
}

impl Employee {
    /// Derived full name, never persisted
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this employee earns strictly more than `threshold`
    pub fn is_high_earner(&self, threshold: Decimal) -> bool {
        self.salary.map(|s| s > threshold).unwrap_or(false)
    }
}

/// Payload for creating an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub manager_id: Option<i64>,
}

/// Partial-update payload: absent fields leave the stored value untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub manager_id: Option<i64>,
}

/// Employee representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub manager_id: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let full_name = employee.full_name();
        EmployeeResponse {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            full_name,
            email: employee.email,
            phone_number: employee.phone_number,
            position: employee.position,
            salary: employee.salary,
            manager_id: employee.manager_id,
        }
    }
}
