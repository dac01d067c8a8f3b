pub mod manager_controller;

pub use manager_controller::configure;
