// Shared test support: in-memory repository fakes and payload factories.
//
// The fakes honor the repository contracts (unique email, optimistic
// version guard, cascade delete) so the service layer can be exercised
// end to end without a database. Failures can be primed to drive the
// orchestrator's error-mapping paths.

#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

pub use memory::{InMemoryEmployeeRepository, InMemoryManagerRepository};

use staffhub::modules::employees::services::{DirectInsert, EmployeeService};
use staffhub::modules::managers::services::ManagerService;

/// An employee service wired over fresh in-memory stores, plus handles to
/// the stores for priming and assertions.
pub fn employee_service() -> (
    Arc<InMemoryEmployeeRepository>,
    Arc<InMemoryManagerRepository>,
    EmployeeService,
) {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let managers = Arc::new(InMemoryManagerRepository::new(employees.clone()));

    let service = EmployeeService::new(
        employees.clone(),
        managers.clone(),
        Arc::new(DirectInsert::new(employees.clone())),
    );

    (employees, managers, service)
}

/// A manager service sharing stores with an employee service, for cascade
/// scenarios.
pub fn manager_service() -> (
    Arc<InMemoryEmployeeRepository>,
    Arc<InMemoryManagerRepository>,
    ManagerService,
) {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let managers = Arc::new(InMemoryManagerRepository::new(employees.clone()));

    let service = ManagerService::new(managers.clone());

    (employees, managers, service)
}
