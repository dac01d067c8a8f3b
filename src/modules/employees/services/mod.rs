pub mod creation;
pub mod employee_service;
pub mod mutation;
pub mod validation;

pub use creation::{build_strategy, CreationStrategy, DirectInsert, StoredProcedureInsert};
pub use employee_service::EmployeeService;
