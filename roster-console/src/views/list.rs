//! Employee list view
//!
//! Fetches the collection on activation and on every refresh; the newest
//! fetch wins. Deleting asks for confirmation first and, once the backend
//! acknowledges, triggers a refresh instead of editing the rows locally.

use std::sync::Arc;

use roster_client::{ClientResult, Confirmation, Employee, EmployeeApi};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::{Switch, describe, spawn_request};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";
const MISSING_ID_MESSAGE: &str = "Cannot delete employee: ID is missing.";
const LOAD_FAILED: &str = "Failed to load employees.";
const DELETE_FAILED: &str = "Error deleting employee.";

/// Results posted back by background requests
#[derive(Debug)]
pub enum ListEvent {
    Loaded {
        generation: u64,
        result: ClientResult<Vec<Employee>>,
    },
    Deleted {
        id: i64,
        result: ClientResult<Confirmation>,
    },
}

pub struct ListView {
    api: Arc<dyn EmployeeApi>,
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    selected: usize,
    pending_delete: Option<i64>,
    fetches: Switch,
    scope: CancellationToken,
    tx: UnboundedSender<ListEvent>,
    rx: UnboundedReceiver<ListEvent>,
}

impl ListView {
    /// Create the view and start the initial fetch
    pub fn activate(api: Arc<dyn EmployeeApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = Self {
            api,
            employees: Vec::new(),
            loading: false,
            error: None,
            selected: 0,
            pending_delete: None,
            fetches: Switch::default(),
            scope: CancellationToken::new(),
            tx,
            rx,
        };
        view.refresh();
        view
    }

    /// Manual refresh signal. Abandons any fetch still in flight.
    pub fn refresh(&mut self) {
        let ticket = self.fetches.begin(&self.scope);
        self.loading = true;
        self.error = None;

        let api = Arc::clone(&self.api);
        let generation = ticket.generation;
        tracing::debug!(generation, "Fetching employees");
        spawn_request(ticket.token, self.tx.clone(), async move {
            ListEvent::Loaded {
                generation,
                result: api.list().await,
            }
        });
    }

    /// Ask the operator to confirm deleting `id`
    pub fn request_delete(&mut self, id: Option<i64>) {
        match id {
            Some(id) => self.pending_delete = Some(id),
            None => {
                tracing::warn!("Attempted to delete employee with undefined ID");
                self.error = Some(MISSING_ID_MESSAGE.to_string());
            }
        }
    }

    /// Ask to delete the highlighted row, if any
    pub fn request_delete_selected(&mut self) {
        if let Some(employee) = self.selected_employee() {
            let id = employee.id;
            self.request_delete(id);
        }
    }

    /// Prompt text while a confirmation is open
    pub fn delete_prompt(&self) -> Option<&'static str> {
        self.pending_delete.map(|_| DELETE_PROMPT)
    }

    /// Id awaiting confirmation
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Operator accepted the prompt: issue the delete
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.loading = true;

        let api = Arc::clone(&self.api);
        spawn_request(self.scope.child_token(), self.tx.clone(), async move {
            ListEvent::Deleted {
                id,
                result: api.delete(id).await,
            }
        });
    }

    /// Operator declined the prompt
    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn next_event(&mut self) -> Option<ListEvent> {
        self.rx.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<ListEvent> {
        self.rx.try_recv().ok()
    }

    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Loaded { generation, result } => {
                if !self.fetches.finish(generation) {
                    tracing::debug!(generation, "Discarding superseded employee list");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(employees) => {
                        self.employees = employees;
                        self.clamp_selection();
                    }
                    Err(e) => {
                        self.error = Some(describe(&e, LOAD_FAILED));
                        self.employees.clear();
                        self.selected = 0;
                    }
                }
            }
            ListEvent::Deleted { id, result } => match result {
                Ok(confirmation) => {
                    tracing::info!(id, "{}", confirmation);
                    self.error = None;
                    self.refresh();
                }
                Err(e) => {
                    self.loading = false;
                    self.error = Some(describe(&e, DELETE_FAILED));
                }
            },
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.employees.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.employees.len() {
            self.selected = self.employees.len().saturating_sub(1);
        }
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
