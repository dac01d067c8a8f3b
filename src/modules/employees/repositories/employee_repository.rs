// MySQL access for the employees table.
//
// Query methods are simple attribute matches; mutation methods carry the
// optimistic version guard. Driver errors are classified into
// PersistenceError here so nothing above this layer sees sqlx types.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{PersistenceError, RepoResult};
use crate::modules::employees::models::Employee;

/// Persistence contract for employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Insert a new row; `employee.id` is ignored and the generated
    /// identifier is returned on the result.
    async fn insert(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Persist changed fields. Fails with [`PersistenceError::Conflict`]
    /// when the row's version no longer matches `employee.version`.
    async fn update(&self, employee: &Employee) -> RepoResult<Employee>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Employee>>;

    async fn find_by_position(&self, position: &str) -> RepoResult<Vec<Employee>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;

    /// Employees with salary strictly above `threshold`
    async fn find_salary_above(&self, threshold: Decimal) -> RepoResult<Vec<Employee>>;

    /// The single employee with the highest salary, if any rows exist
    async fn find_highest_paid(&self) -> RepoResult<Option<Employee>>;

    async fn find_by_manager_id(&self, manager_id: i64) -> RepoResult<Vec<Employee>>;

    /// Sum over all present salaries
    async fn total_salary(&self) -> RepoResult<Decimal>;
}

const EMPLOYEE_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, position, salary, manager_id, version";

/// MySQL-backed employee repository
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn insert(&self, employee: &Employee) -> RepoResult<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
                (first_name, last_name, email, phone_number, position, salary, manager_id, version)
            VALUES (?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(&employee.position)
        .bind(employee.salary)
        .bind(employee.manager_id)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)?;

        let mut created = employee.clone();
        created.id = result.last_insert_id() as i64;
        created.version = 0;

        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> RepoResult<Employee> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = ?, last_name = ?, email = ?, phone_number = ?,
                position = ?, salary = ?, manager_id = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(&employee.position)
        .bind(employee.salary)
        .bind(employee.manager_id)
        .bind(employee.id)
        .bind(employee.version)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)?;

        // The caller has already looked the row up, so a missed guard means
        // another writer got there first.
        if result.rows_affected() == 0 {
            return Err(PersistenceError::Conflict {
                entity: "employee",
                id: employee.id,
            });
        }

        let mut updated = employee.clone();
        updated.version += 1;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(PersistenceError::from_sqlx)?;

        Ok(())
    }

    async fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE last_name = ? ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .bind(last_name)
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_by_position(&self, position: &str) -> RepoResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE position = ? ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .bind(position)
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE email = ?",
            EMPLOYEE_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_salary_above(&self, threshold: Decimal) -> RepoResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE salary > ? ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_highest_paid(&self) -> RepoResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE salary IS NOT NULL ORDER BY salary DESC LIMIT 1",
            EMPLOYEE_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_by_manager_id(&self, manager_id: i64) -> RepoResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE manager_id = ? ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn total_salary(&self) -> RepoResult<Decimal> {
        let total: Option<Decimal> =
            sqlx::query_scalar("SELECT SUM(salary) FROM employees")
                .fetch_one(&self.pool)
                .await
                .map_err(PersistenceError::from_sqlx)?;

        Ok(total.unwrap_or(Decimal::ZERO))
    }
}
