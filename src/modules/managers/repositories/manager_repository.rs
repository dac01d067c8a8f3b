use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{PersistenceError, RepoResult};
use crate::modules::managers::models::Manager;

/// Persistence contract for managers
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Manager>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Manager>>;

    async fn insert(&self, manager: &Manager) -> RepoResult<Manager>;

    /// Persist changed fields under the optimistic version guard.
    async fn update(&self, manager: &Manager) -> RepoResult<Manager>;

    /// Delete the manager and every employee referencing it, atomically.
    ///
    /// Returns the number of dependent employees removed.
    async fn delete_cascading(&self, id: i64) -> RepoResult<u64>;
}

const MANAGER_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, salary, version";

/// MySQL-backed manager repository
pub struct MySqlManagerRepository {
    pool: MySqlPool,
}

impl MySqlManagerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagerRepository for MySqlManagerRepository {
    async fn find_all(&self) -> RepoResult<Vec<Manager>> {
        sqlx::query_as::<_, Manager>(&format!(
            "SELECT {} FROM managers ORDER BY id",
            MANAGER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Manager>> {
        sqlx::query_as::<_, Manager>(&format!(
            "SELECT {} FROM managers WHERE id = ?",
            MANAGER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)
    }

    async fn insert(&self, manager: &Manager) -> RepoResult<Manager> {
        let result = sqlx::query(
            r#"
            INSERT INTO managers
                (first_name, last_name, email, phone_number, salary, version)
            VALUES (?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(&manager.first_name)
        .bind(&manager.last_name)
        .bind(&manager.email)
        .bind(&manager.phone_number)
        .bind(manager.salary)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)?;

        let mut created = manager.clone();
        created.id = result.last_insert_id() as i64;
        created.version = 0;

        Ok(created)
    }

    async fn update(&self, manager: &Manager) -> RepoResult<Manager> {
        let result = sqlx::query(
            r#"
            UPDATE managers
            SET first_name = ?, last_name = ?, email = ?, phone_number = ?,
                salary = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&manager.first_name)
        .bind(&manager.last_name)
        .bind(&manager.email)
        .bind(&manager.phone_number)
        .bind(manager.salary)
        .bind(manager.id)
        .bind(manager.version)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::Conflict {
                entity: "manager",
                id: manager.id,
            });
        }

        let mut updated = manager.clone();
        updated.version += 1;

        Ok(updated)
    }

    async fn delete_cascading(&self, id: i64) -> RepoResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(PersistenceError::transaction)?;

        let employees_removed = sqlx::query("DELETE FROM employees WHERE manager_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(PersistenceError::from_sqlx)?
            .rows_affected();

        sqlx::query("DELETE FROM managers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(PersistenceError::from_sqlx)?;

        tx.commit().await.map_err(PersistenceError::transaction)?;

        Ok(employees_removed)
    }
}
