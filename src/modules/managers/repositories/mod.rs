mod manager_repository;

pub use manager_repository::{ManagerRepository, MySqlManagerRepository};
