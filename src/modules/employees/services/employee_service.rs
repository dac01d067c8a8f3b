use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::employees::models::{
    CreateEmployeeRequest, Employee, UpdateEmployeeRequest,
};
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::employees::services::creation::CreationStrategy;
use crate::modules::employees::services::{mutation, validation};
use crate::modules::managers::models::Manager;
use crate::modules::managers::repositories::ManagerRepository;

/// Business logic for employee records.
///
/// Mutating operations follow lookup, validate, mutate, persist; every
/// persistence failure is mapped to a domain error kind at this boundary.
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
    manager_repo: Arc<dyn ManagerRepository>,
    creation: Arc<dyn CreationStrategy>,
}

impl EmployeeService {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        manager_repo: Arc<dyn ManagerRepository>,
        creation: Arc<dyn CreationStrategy>,
    ) -> Self {
        Self {
            employee_repo,
            manager_repo,
            creation,
        }
    }

    /// Create a new employee via the configured creation strategy.
    ///
    /// A supplied manager reference must resolve; a dangling one rejects the
    /// whole request and nothing is persisted.
    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee> {
        tracing::info!(
            first_name = %request.first_name,
            last_name = %request.last_name,
            "Creating employee"
        );

        validation::validate_create(&request)?;

        if let Some(manager_id) = request.manager_id {
            self.resolve_manager(manager_id).await?;
        }

        let employee = Employee {
            id: 0, // assigned by the creation pathway
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            position: request.position,
            salary: request.salary,
            manager_id: request.manager_id,
            version: 0,
        };

        self.creation.insert(employee).await
    }

    /// Partial update: lookup, validate, mutate, persist.
    pub async fn update_employee(
        &self,
        id: i64,
        details: UpdateEmployeeRequest,
    ) -> Result<Employee> {
        tracing::info!(employee_id = id, "Updating employee");

        validation::validate_update(&details)?;

        let mut employee = self
            .employee_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))?;

        // A supplied manager reference is resolved before any field moves.
        if let Some(manager_id) = details.manager_id {
            self.resolve_manager(manager_id).await?;
        }

        mutation::apply_update(&mut employee, &details);

        let updated = self
            .employee_repo
            .update(&employee)
            .await
            .map_err(AppError::from)?;

        tracing::info!(employee_id = id, "Updated employee");
        Ok(updated)
    }

    /// Delete by identifier; absent rows are an error, never a silent no-op.
    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        let employee = self
            .employee_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))?;

        self.employee_repo
            .delete(employee.id)
            .await
            .map_err(AppError::from)?;

        tracing::info!(employee_id = id, "Deleted employee");
        Ok(())
    }

    /// Resolve a manager reference against the manager store.
    async fn resolve_manager(&self, manager_id: i64) -> Result<Manager> {
        self.manager_repo
            .find_by_id(manager_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                AppError::not_found(format!("Manager not found with id: {}", manager_id))
            })
    }

    // Query facade: pass-through lookups with no business logic.

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.employee_repo.find_all().await.map_err(AppError::from)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Employee>> {
        self.employee_repo
            .find_by_last_name(last_name)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_position(&self, position: &str) -> Result<Vec<Employee>> {
        self.employee_repo
            .find_by_position(position)
            .await
            .map_err(AppError::from)
    }

    /// A miss here is an explicit not-found, unlike the list-shaped finders.
    pub async fn find_by_email(&self, email: &str) -> Result<Employee> {
        self.employee_repo
            .find_by_email(email)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                AppError::not_found(format!("Employee not found with email: {}", email))
            })
    }

    pub async fn find_high_paid(&self, threshold: Decimal) -> Result<Vec<Employee>> {
        self.employee_repo
            .find_salary_above(threshold)
            .await
            .map_err(AppError::from)
    }

    /// Full names of everyone earning strictly above `threshold`.
    pub async fn find_high_paid_names(&self, threshold: Decimal) -> Result<Vec<String>> {
        let employees = self.find_high_paid(threshold).await?;
        Ok(employees.iter().map(Employee::full_name).collect())
    }

    pub async fn find_highest_paid(&self) -> Result<Employee> {
        self.employee_repo
            .find_highest_paid()
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found("No employees with a salary on record"))
    }

    /// Employees reporting to `manager_id`; the manager itself must exist.
    pub async fn find_by_manager(&self, manager_id: i64) -> Result<Vec<Employee>> {
        self.resolve_manager(manager_id).await?;
        self.employee_repo
            .find_by_manager_id(manager_id)
            .await
            .map_err(AppError::from)
    }

    pub async fn total_salary(&self) -> Result<Decimal> {
        self.employee_repo
            .total_salary()
            .await
            .map_err(AppError::from)
    }
}
