use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::employees::services::validation::is_valid_email;
use crate::modules::managers::models::{
    CreateManagerRequest, Manager, UpdateManagerRequest,
};
use crate::modules::managers::repositories::ManagerRepository;

/// Business logic for manager records.
///
/// Deleting a manager cascades to its employees: both go in the same
/// transactional unit, handled by the repository. The alternative policy of
/// orphaning employees was rejected so that no employee ever carries a
/// dangling manager reference.
pub struct ManagerService {
    manager_repo: Arc<dyn ManagerRepository>,
}

impl ManagerService {
    pub fn new(manager_repo: Arc<dyn ManagerRepository>) -> Self {
        Self { manager_repo }
    }

    pub async fn create_manager(&self, request: CreateManagerRequest) -> Result<Manager> {
        tracing::info!(
            first_name = %request.first_name,
            last_name = %request.last_name,
            "Creating manager"
        );

        validate_create(&request)?;

        let manager = Manager {
            id: 0, // assigned by the store
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            salary: request.salary,
            version: 0,
        };

        let created = self
            .manager_repo
            .insert(&manager)
            .await
            .map_err(AppError::from)?;

        if created.id <= 0 {
            return Err(AppError::creation(
                "insert did not produce a generated identifier",
            ));
        }

        Ok(created)
    }

    pub async fn get_manager_by_id(&self, id: i64) -> Result<Option<Manager>> {
        self.manager_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)
    }

    pub async fn get_all_managers(&self) -> Result<Vec<Manager>> {
        self.manager_repo.find_all().await.map_err(AppError::from)
    }

    /// Partial update: lookup, validate, mutate, persist.
    pub async fn update_manager(&self, id: i64, details: UpdateManagerRequest) -> Result<Manager> {
        tracing::info!(manager_id = id, "Updating manager");

        validate_update(&details)?;

        let mut manager = self
            .manager_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Manager not found with id: {}", id)))?;

        apply_update(&mut manager, &details);

        self.manager_repo
            .update(&manager)
            .await
            .map_err(AppError::from)
    }

    /// Delete the manager and, in the same transaction, every employee
    /// reporting to it. Returns the number of employees removed.
    pub async fn delete_manager(&self, id: i64) -> Result<u64> {
        let manager = self
            .manager_repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Manager not found with id: {}", id)))?;

        let employees_removed = self
            .manager_repo
            .delete_cascading(manager.id)
            .await
            .map_err(AppError::from)?;

        tracing::info!(
            manager_id = id,
            employees_removed,
            "Deleted manager with dependents"
        );
        Ok(employees_removed)
    }
}

fn check_name(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", label)));
    }
    Ok(())
}

fn check_salary(salary: Decimal) -> Result<()> {
    if salary < Decimal::ZERO {
        return Err(AppError::validation("Salary cannot be negative"));
    }
    Ok(())
}

fn validate_create(request: &CreateManagerRequest) -> Result<()> {
    check_name(&request.first_name, "First name")?;
    check_name(&request.last_name, "Last name")?;
    if let Some(email) = &request.email {
        if !is_valid_email(email) {
            return Err(AppError::validation("Invalid email address"));
        }
    }
    check_salary(request.salary)
}

fn validate_update(details: &UpdateManagerRequest) -> Result<()> {
    if let Some(first_name) = &details.first_name {
        check_name(first_name, "First name")?;
    }
    if let Some(last_name) = &details.last_name {
        check_name(last_name, "Last name")?;
    }
    if let Some(email) = &details.email {
        if !is_valid_email(email) {
            return Err(AppError::validation("Invalid email address"));
        }
    }
    if let Some(salary) = details.salary {
        check_salary(salary)?;
    }
    Ok(())
}

/// Null-safe partial update, mirroring the employee mutator.
fn apply_update(existing: &mut Manager, details: &UpdateManagerRequest) {
    if let Some(first_name) = &details.first_name {
        existing.first_name = first_name.clone();
    }
    if let Some(last_name) = &details.last_name {
        existing.last_name = last_name.clone();
    }
    if let Some(email) = &details.email {
        existing.email = Some(email.clone());
    }
    if let Some(phone_number) = &details.phone_number {
        existing.phone_number = Some(phone_number.clone());
    }
    if let Some(salary) = details.salary {
        existing.salary = salary;
    }
}
