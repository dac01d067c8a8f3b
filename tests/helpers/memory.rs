use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use staffhub::core::{PersistenceError, RepoResult};
use staffhub::modules::employees::models::Employee;
use staffhub::modules::employees::repositories::EmployeeRepository;
use staffhub::modules::managers::models::Manager;
use staffhub::modules::managers::repositories::ManagerRepository;

/// In-memory employee store honoring the repository contract.
pub struct InMemoryEmployeeRepository {
    rows: Mutex<BTreeMap<i64, Employee>>,
    next_id: AtomicI64,
    fail_next: Mutex<Option<PersistenceError>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail_next: Mutex::new(None),
        }
    }

    /// Prime the next mutating call to fail with `err`.
    pub fn fail_next_with(&self, err: PersistenceError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_primed_failure(&self) -> Option<PersistenceError> {
        self.fail_next.lock().unwrap().take()
    }

    /// Snapshot of all stored employees, ordered by id.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    /// Direct fetch for assertions, bypassing the trait.
    pub fn stored(&self, id: i64) -> Option<Employee> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    /// Overwrite a stored row, e.g. to simulate a concurrent writer.
    pub fn put(&self, employee: Employee) {
        self.rows.lock().unwrap().insert(employee.id, employee);
    }

    fn email_taken(rows: &BTreeMap<i64, Employee>, email: &str, excluding: i64) -> bool {
        rows.values()
            .any(|e| e.id != excluding && e.email == email)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self.stored(id))
    }

    async fn insert(&self, employee: &Employee) -> RepoResult<Employee> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        if Self::email_taken(&rows, &employee.email, 0) {
            return Err(PersistenceError::UniqueViolation(format!(
                "Duplicate entry '{}' for key 'uq_employees_email'",
                employee.email
            )));
        }

        let mut created = employee.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        created.version = 0;
        rows.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> RepoResult<Employee> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        if Self::email_taken(&rows, &employee.email, employee.id) {
            return Err(PersistenceError::UniqueViolation(format!(
                "Duplicate entry '{}' for key 'uq_employees_email'",
                employee.email
            )));
        }

        match rows.get(&employee.id) {
            Some(stored) if stored.version == employee.version => {
                let mut updated = employee.clone();
                updated.version += 1;
                rows.insert(updated.id, updated.clone());
                Ok(updated)
            }
            _ => Err(PersistenceError::Conflict {
                entity: "employee",
                id: employee.id,
            }),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Employee>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|e| e.last_name == last_name)
            .collect())
    }

    async fn find_by_position(&self, position: &str) -> RepoResult<Vec<Employee>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|e| e.position.as_deref() == Some(position))
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        Ok(self.snapshot().into_iter().find(|e| e.email == email))
    }

    async fn find_salary_above(&self, threshold: Decimal) -> RepoResult<Vec<Employee>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|e| e.salary.map(|s| s > threshold).unwrap_or(false))
            .collect())
    }

    async fn find_highest_paid(&self) -> RepoResult<Option<Employee>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|e| e.salary.is_some())
            .max_by_key(|e| e.salary))
    }

    async fn find_by_manager_id(&self, manager_id: i64) -> RepoResult<Vec<Employee>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|e| e.manager_id == Some(manager_id))
            .collect())
    }

    async fn total_salary(&self) -> RepoResult<Decimal> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter_map(|e| e.salary)
            .sum())
    }
}

/// In-memory manager store sharing the employee store so cascade deletes
/// behave like the transactional MySQL implementation.
pub struct InMemoryManagerRepository {
    rows: Mutex<BTreeMap<i64, Manager>>,
    next_id: AtomicI64,
    fail_next: Mutex<Option<PersistenceError>>,
    employees: Arc<InMemoryEmployeeRepository>,
}

impl InMemoryManagerRepository {
    pub fn new(employees: Arc<InMemoryEmployeeRepository>) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail_next: Mutex::new(None),
            employees,
        }
    }

    /// Prime the next mutating call to fail with `err`.
    pub fn fail_next_with(&self, err: PersistenceError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_primed_failure(&self) -> Option<PersistenceError> {
        self.fail_next.lock().unwrap().take()
    }

    pub fn snapshot(&self) -> Vec<Manager> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    async fn find_all(&self) -> RepoResult<Vec<Manager>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Manager>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, manager: &Manager) -> RepoResult<Manager> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }

        let mut created = manager.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        created.version = 0;
        self.rows.lock().unwrap().insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(&self, manager: &Manager) -> RepoResult<Manager> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.get(&manager.id) {
            Some(stored) if stored.version == manager.version => {
                let mut updated = manager.clone();
                updated.version += 1;
                rows.insert(updated.id, updated.clone());
                Ok(updated)
            }
            _ => Err(PersistenceError::Conflict {
                entity: "manager",
                id: manager.id,
            }),
        }
    }

    async fn delete_cascading(&self, id: i64) -> RepoResult<u64> {
        if let Some(err) = self.take_primed_failure() {
            return Err(err);
        }

        let mut employees = self.employees.rows.lock().unwrap();
        let doomed: Vec<i64> = employees
            .values()
            .filter(|e| e.manager_id == Some(id))
            .map(|e| e.id)
            .collect();
        for employee_id in &doomed {
            employees.remove(employee_id);
        }
        drop(employees);

        self.rows.lock().unwrap().remove(&id);

        Ok(doomed.len() as u64)
    }
}
