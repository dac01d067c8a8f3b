pub mod employees;
pub mod health;
pub mod managers;
