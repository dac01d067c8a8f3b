mod manager;

pub use manager::{CreateManagerRequest, Manager, ManagerResponse, UpdateManagerRequest};
