// Employee creation strategies.
//
// Two interchangeable pathways behind one trait, selected by configuration:
// a plain insert through the repository, or a stored-procedure call. The
// stored procedure either returns the inserted row (mapped column by column,
// statically) or hands the generated identifier back through an output
// parameter. Neither variant may return a half-populated entity: a missing
// or wrongly-typed identifier aborts the transaction and surfaces as a
// creation error.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Row, Transaction};

use crate::config::CreationMode;
use crate::core::{AppError, PersistenceError, Result};
use crate::modules::employees::models::Employee;
use crate::modules::employees::repositories::EmployeeRepository;

/// A pathway that persists a validated, manager-resolved employee and
/// returns it with its generated identifier.
#[async_trait]
pub trait CreationStrategy: Send + Sync {
    async fn insert(&self, employee: Employee) -> Result<Employee>;
}

/// Wire up the strategy selected by configuration.
pub fn build_strategy(
    mode: CreationMode,
    pool: MySqlPool,
    repo: Arc<dyn EmployeeRepository>,
) -> Arc<dyn CreationStrategy> {
    match mode {
        CreationMode::Direct => Arc::new(DirectInsert::new(repo)),
        CreationMode::ProcedureRow => {
            Arc::new(StoredProcedureInsert::new(pool, SpResultMode::Row))
        }
        CreationMode::ProcedureOut => {
            Arc::new(StoredProcedureInsert::new(pool, SpResultMode::OutParam))
        }
    }
}

/// Constraint violations keep their integrity kind; everything else a
/// creation pathway raises is wrapped as a creation failure carrying the
/// original cause.
fn map_creation_failure(err: PersistenceError) -> AppError {
    match err {
        PersistenceError::UniqueViolation(_) | PersistenceError::ForeignKeyViolation(_) => {
            err.into()
        }
        other => AppError::Creation(format!("Failed to create employee: {}", other)),
    }
}

/// Plain INSERT through the repository
pub struct DirectInsert {
    repo: Arc<dyn EmployeeRepository>,
}

impl DirectInsert {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CreationStrategy for DirectInsert {
    async fn insert(&self, employee: Employee) -> Result<Employee> {
        let created = self
            .repo
            .insert(&employee)
            .await
            .map_err(map_creation_failure)?;

        // last_insert_id must have produced a real key
        if created.id <= 0 {
            return Err(AppError::creation(
                "insert did not produce a generated identifier",
            ));
        }

        tracing::info!(employee_id = created.id, "Created employee (direct insert)");
        Ok(created)
    }
}

/// How the stored procedure hands back the generated identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpResultMode {
    /// The procedure selects the inserted row
    Row,
    /// The procedure fills an `OUT` parameter with the new id
    OutParam,
}

/// Creation via `sp_insert_employee` / `sp_insert_employee_out`
pub struct StoredProcedureInsert {
    pool: MySqlPool,
    mode: SpResultMode,
}

impl StoredProcedureInsert {
    pub fn new(pool: MySqlPool, mode: SpResultMode) -> Self {
        Self { pool, mode }
    }

    async fn insert_in_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        employee: &Employee,
    ) -> Result<Employee> {
        match self.mode {
            SpResultMode::Row => {
                let row = sqlx::query("CALL sp_insert_employee(?, ?, ?, ?, ?, ?, ?)")
                    .bind(&employee.first_name)
                    .bind(&employee.last_name)
                    .bind(&employee.email)
                    .bind(&employee.phone_number)
                    .bind(&employee.position)
                    .bind(employee.salary)
                    .bind(employee.manager_id)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(|e| map_creation_failure(PersistenceError::from_sqlx(e)))?
                    .ok_or_else(|| {
                        AppError::creation("stored procedure returned no inserted row")
                    })?;

                map_employee_row(&row)
            }
            SpResultMode::OutParam => {
                sqlx::query("CALL sp_insert_employee_out(?, ?, ?, ?, ?, ?, ?, @employee_id)")
                    .bind(&employee.first_name)
                    .bind(&employee.last_name)
                    .bind(&employee.email)
                    .bind(&employee.phone_number)
                    .bind(&employee.position)
                    .bind(employee.salary)
                    .bind(employee.manager_id)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| map_creation_failure(PersistenceError::from_sqlx(e)))?;

                // Session variables survive between statements on the same
                // connection, which the transaction pins for us.
                let id: Option<i64> =
                    sqlx::query_scalar("SELECT CAST(@employee_id AS SIGNED)")
                        .fetch_one(&mut **tx)
                        .await
                        .map_err(|e| map_creation_failure(PersistenceError::from_sqlx(e)))?;

                let mut created = employee.clone();
                created.id = require_generated_id(id)?;
                created.version = 0;
                Ok(created)
            }
        }
    }
}

#[async_trait]
impl CreationStrategy for StoredProcedureInsert {
    async fn insert(&self, employee: Employee) -> Result<Employee> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Transaction(format!("Failed to start transaction: {}", e)))?;

        match self.insert_in_tx(&mut tx, &employee).await {
            Ok(created) => {
                tx.commit().await.map_err(|e| {
                    AppError::Transaction(format!("Failed to commit transaction: {}", e))
                })?;
                tracing::info!(
                    employee_id = created.id,
                    mode = ?self.mode,
                    "Created employee (stored procedure)"
                );
                Ok(created)
            }
            Err(err) => {
                // Undo whatever the procedure applied before failing.
                tx.rollback().await.ok();
                Err(err)
            }
        }
    }
}

/// Explicit, statically declared column-by-column mapping of the row the
/// stored procedure returns. Any missing or wrongly-typed column aborts the
/// creation rather than producing a partial entity.
fn map_employee_row(row: &MySqlRow) -> Result<Employee> {
    let employee = Employee {
        id: column(row, "id")?,
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        email: column(row, "email")?,
        phone_number: column(row, "phone_number")?,
        position: column(row, "position")?,
        salary: column(row, "salary")?,
        manager_id: column(row, "manager_id")?,
        version: column(row, "version")?,
    };

    if employee.id <= 0 {
        return Err(AppError::creation(
            "stored procedure returned an invalid identifier",
        ));
    }

    Ok(employee)
}

fn column<'r, T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>>(
    row: &'r MySqlRow,
    name: &str,
) -> Result<T> {
    row.try_get(name)
        .map_err(|e| AppError::creation(format!("stored procedure result lacks '{}': {}", name, e)))
}

/// Output-parameter identifiers must be present and positive.
fn require_generated_id(id: Option<i64>) -> Result<i64> {
    match id {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(AppError::creation(format!(
            "stored procedure produced an invalid identifier: {}",
            id
        ))),
        None => Err(AppError::creation(
            "stored procedure did not produce an identifier",
        )),
    }
}
