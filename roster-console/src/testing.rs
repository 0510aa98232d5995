//! In-memory `EmployeeApi` for view tests

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use roster_client::{ClientError, ClientResult, Confirmation, Employee, EmployeeApi, StatusCode};

#[derive(Default)]
pub struct FakeApi {
    employees: Mutex<Vec<Employee>>,
    list_calls: AtomicUsize,
    get_calls: Mutex<Vec<i64>>,
    created: Mutex<Vec<Employee>>,
    updated: Mutex<Vec<(i64, Employee)>>,
    deleted: Mutex<Vec<i64>>,
    confirmation: Mutex<Option<String>>,
    fail_list: AtomicBool,
    fail_deletes: AtomicBool,
    fail_mutations: AtomicBool,
}

impl FakeApi {
    /// Records with ids `1..=count`
    pub fn with_employees(count: i64) -> Arc<Self> {
        let employees = (1..=count)
            .map(|i| {
                Employee::new(
                    format!("Employee {i}"),
                    format!("555-01{i:02}"),
                    format!("employee{i}@example.com"),
                )
                .with_id(i)
            })
            .collect();
        Arc::new(Self {
            employees: Mutex::new(employees),
            ..Default::default()
        })
    }

    pub fn failing_list() -> Arc<Self> {
        let api = Self::default();
        api.fail_list.store(true, Ordering::SeqCst);
        Arc::new(api)
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self) {
        self.fail_mutations.store(true, Ordering::SeqCst);
    }

    pub fn set_confirmation(&self, text: &str) {
        *self.confirmation.lock().unwrap() = Some(text.to_string());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> Vec<i64> {
        self.get_calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<Employee> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(i64, Employee)> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<i64> {
        self.deleted.lock().unwrap().clone()
    }

    fn server_error() -> ClientError {
        ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    fn confirm(&self, default: &str) -> Confirmation {
        let text = self.confirmation.lock().unwrap().clone();
        Confirmation::new(text.unwrap_or_else(|| default.to_string()))
    }
}

#[async_trait]
impl EmployeeApi for FakeApi {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.get_calls.lock().unwrap().push(id);
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::from_status(StatusCode::NOT_FOUND, "Employee not found"))
    }

    async fn create(&self, employee: &Employee) -> ClientResult<Confirmation> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.created.lock().unwrap().push(employee.clone());
        Ok(self.confirm("Employee created successfully"))
    }

    async fn update(&self, id: i64, employee: &Employee) -> ClientResult<Confirmation> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.updated.lock().unwrap().push((id, employee.clone()));
        Ok(self.confirm("Employee updated successfully"))
    }

    async fn delete(&self, id: i64) -> ClientResult<Confirmation> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.deleted.lock().unwrap().push(id);
        self.employees.lock().unwrap().retain(|e| e.id != Some(id));
        Ok(self.confirm("Employee deleted successfully"))
    }
}
