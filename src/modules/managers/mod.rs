// Managers module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateManagerRequest, Manager, ManagerResponse, UpdateManagerRequest};
pub use repositories::{ManagerRepository, MySqlManagerRepository};
pub use services::ManagerService;
