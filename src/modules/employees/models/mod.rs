mod employee;

pub use employee::{
    CreateEmployeeRequest, Employee, EmployeeResponse, UpdateEmployeeRequest, MAX_EMAIL_LEN,
    MAX_NAME_LEN,
};
