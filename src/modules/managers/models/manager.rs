use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted manager record.
///
/// The employees reporting to a manager are obtained by query
/// (`EmployeeRepository::find_by_manager_id`), not stored on the struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Manager {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Decimal,
    /// Optimistic-lock counter, managed by the persistence layer
    pub version: i64,
}

impl Manager {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateManagerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Decimal,
}

/// Partial-update payload: absent fields leave the stored value untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateManagerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<Decimal>,
}

/// Manager representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Decimal,
}

impl From<Manager> for ManagerResponse {
    fn from(manager: Manager) -> Self {
        let full_name = manager.full_name();
        ManagerResponse {
            id: manager.id,
            first_name: manager.first_name,
            last_name: manager.last_name,
            full_name,
            email: manager.email,
            phone_number: manager.phone_number,
            salary: manager.salary,
        }
    }
}
