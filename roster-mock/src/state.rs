//! In-memory employee store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use shared::Employee;
use tokio::sync::RwLock;

/// Employee records keyed by id; ids start at 1 and are never reused
#[derive(Debug)]
pub struct MockState {
    employees: RwLock<BTreeMap<i64, Employee>>,
    next_id: AtomicI64,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store pre-filled with `employees`, ids assigned in order
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let mut map = BTreeMap::new();
        let mut next = 1;
        for employee in employees {
            map.insert(next, employee.with_id(next));
            next += 1;
        }
        Self {
            employees: RwLock::new(map),
            next_id: AtomicI64::new(next),
        }
    }

    /// A handful of sample records for manual runs
    pub fn seeded() -> Self {
        Self::with_employees([
            Employee::new("Ada Lovelace", "555-0100", "ada@example.com"),
            Employee::new("Grace Hopper", "555-0101", "grace@example.com"),
            Employee::new("Alan Turing", "555-0102", "alan@example.com"),
        ])
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.employees.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<Employee> {
        self.employees.read().await.get(&id).cloned()
    }

    /// Insert with a fresh id, ignoring any id in the payload
    pub async fn insert(&self, employee: Employee) -> Employee {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let employee = employee.with_id(id);
        self.employees.write().await.insert(id, employee.clone());
        employee
    }

    /// Replace an existing record; the path id wins over the payload id
    pub async fn replace(&self, id: i64, employee: Employee) -> Option<Employee> {
        let mut employees = self.employees.write().await;
        let slot = employees.get_mut(&id)?;
        *slot = employee.with_id(id);
        Some(slot.clone())
    }

    pub async fn remove(&self, id: i64) -> Option<Employee> {
        self.employees.write().await.remove(&id)
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}
