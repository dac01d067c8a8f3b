//! Staffhub employee record-management service
//!
//! CRUD and query operations over employees and their managers, backed by
//! MySQL. The service layer owns validation, partial-update semantics,
//! relationship integrity, and the mapping of persistence failures onto
//! domain error kinds.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, PersistenceError, RepoResult, Result};
pub use crate::modules::employees;
pub use crate::modules::managers;
