//! Shared add/edit form
//!
//! The mode is fixed at activation by the id route parameter. Submission is
//! validated locally first; nothing reaches the backend while a field is
//! invalid.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use roster_client::{ClientResult, Confirmation, Employee, EmployeeApi, EmployeeField};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::{describe, spawn_request};
use crate::router::Route;

pub const INVALID_FORM_MESSAGE: &str =
    "Please correct the highlighted form errors before submitting.";

/// Pause between a successful save and returning to the list
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn from_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add Employee",
            Self::Edit(_) => "Edit Employee",
        }
    }

    fn success_fallback(&self) -> &'static str {
        match self {
            Self::Create => "Employee added successfully!",
            Self::Edit(_) => "Employee updated successfully!",
        }
    }

    fn failure_fallback(&self) -> &'static str {
        match self {
            Self::Create => "Failed to add employee.",
            Self::Edit(_) => "Failed to update employee.",
        }
    }
}

/// Results posted back by background work
#[derive(Debug)]
pub enum FormEvent {
    /// Edit mode pre-fill
    Loaded(ClientResult<Employee>),
    Submitted(ClientResult<Confirmation>),
    /// The post-save delay elapsed
    RedirectDue,
}

pub struct FormView {
    api: Arc<dyn EmployeeApi>,
    mode: FormMode,
    draft: Employee,
    touched: BTreeSet<EmployeeField>,
    loading: bool,
    redirect_pending: bool,
    error: Option<String>,
    success: Option<String>,
    scope: CancellationToken,
    tx: UnboundedSender<FormEvent>,
    rx: UnboundedReceiver<FormEvent>,
}

impl FormView {
    /// Create the form. With an id the existing record is fetched and
    /// pre-filled; without one the form starts empty.
    pub fn activate(api: Arc<dyn EmployeeApi>, id: Option<i64>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = Self {
            api,
            mode: FormMode::from_id(id),
            draft: Employee::default(),
            touched: BTreeSet::new(),
            loading: false,
            redirect_pending: false,
            error: None,
            success: None,
            scope: CancellationToken::new(),
            tx,
            rx,
        };

        if let FormMode::Edit(id) = view.mode {
            view.loading = true;
            let api = Arc::clone(&view.api);
            spawn_request(view.scope.child_token(), view.tx.clone(), async move {
                FormEvent::Loaded(api.get(id).await)
            });
        }
        view
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        self.draft.field(field)
    }

    pub fn set_value(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Mark a field as visited so its error becomes visible
    pub fn touch(&mut self, field: EmployeeField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: EmployeeField) -> bool {
        self.touched.contains(&field)
    }

    /// Validation message for a visited field
    pub fn field_error(&self, field: EmployeeField) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.draft
            .validate_fields()
            .err()
            .and_then(|errors| errors.get(field).map(str::to_string))
    }

    pub fn is_valid(&self) -> bool {
        self.draft.validate_fields().is_ok()
    }

    /// Validate and send the draft. Returns whether a request was issued.
    pub fn submit(&mut self) -> bool {
        if self.loading || self.redirect_pending {
            return false;
        }
        if self.draft.validate_fields().is_err() {
            self.touched.extend(EmployeeField::ALL);
            self.error = Some(INVALID_FORM_MESSAGE.to_string());
            self.success = None;
            return false;
        }

        self.loading = true;
        self.error = None;
        self.success = None;

        let mut employee = self.draft.normalized();
        let api = Arc::clone(&self.api);
        let token = self.scope.child_token();
        match self.mode {
            FormMode::Edit(id) => {
                employee.id = Some(id);
                spawn_request(token, self.tx.clone(), async move {
                    FormEvent::Submitted(api.update(id, &employee).await)
                });
            }
            FormMode::Create => {
                spawn_request(token, self.tx.clone(), async move {
                    FormEvent::Submitted(api.create(&employee).await)
                });
            }
        }
        true
    }

    /// Leave without saving
    pub fn cancel(&self) -> Route {
        Route::List
    }

    pub async fn next_event(&mut self) -> Option<FormEvent> {
        self.rx.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<FormEvent> {
        self.rx.try_recv().ok()
    }

    /// Fold a background result into the form; may request navigation
    pub fn apply(&mut self, event: FormEvent) -> Option<Route> {
        match event {
            FormEvent::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(employee) => self.draft = employee,
                    Err(e) => {
                        self.error = Some(describe(&e, "Failed to load employee data for editing."))
                    }
                }
                None
            }
            FormEvent::Submitted(result) => {
                self.loading = false;
                match result {
                    Ok(confirmation) => {
                        self.success = Some(confirmation.message_or(self.mode.success_fallback()));
                        self.schedule_redirect();
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Form submission error");
                        self.error = Some(describe(&e, self.mode.failure_fallback()));
                    }
                }
                None
            }
            FormEvent::RedirectDue => Some(Route::List),
        }
    }

    fn schedule_redirect(&mut self) {
        self.redirect_pending = true;
        spawn_request(self.scope.child_token(), self.tx.clone(), async {
            tokio::time::sleep(REDIRECT_DELAY).await;
            FormEvent::RedirectDue
        });
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

impl Drop for FormView {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    async fn settle(view: &mut FormView) -> Option<Route> {
        let event = view.next_event().await.unwrap();
        view.apply(event)
    }

    fn fill(view: &mut FormView, name: &str, phone: &str, email: &str) {
        view.set_value(EmployeeField::Name, name);
        view.set_value(EmployeeField::Phone, phone);
        view.set_value(EmployeeField::Email, email);
    }

    #[tokio::test]
    async fn test_create_mode_starts_empty() {
        let api = FakeApi::with_employees(1);
        let view = FormView::activate(api.clone(), None);

        assert_eq!(view.mode(), FormMode::Create);
        assert!(!view.is_loading());
        assert_eq!(view.draft(), &Employee::default());
        tokio::task::yield_now().await;
        assert!(api.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submit_issues_no_request() {
        let api = FakeApi::with_employees(0);
        let mut view = FormView::activate(api.clone(), None);
        fill(&mut view, "Ada", "555-0100", "not-an-email");

        assert!(!view.submit());

        assert_eq!(view.error(), Some(INVALID_FORM_MESSAGE));
        assert!(view.field_error(EmployeeField::Email).is_some());
        assert!(view.field_error(EmployeeField::Name).is_none());
        tokio::task::yield_now().await;
        assert!(api.created().is_empty());
        assert!(api.updated().is_empty());
    }

    #[tokio::test]
    async fn test_empty_required_field_blocks_submit() {
        let api = FakeApi::with_employees(0);
        let mut view = FormView::activate(api.clone(), None);
        fill(&mut view, "Ada", "   ", "ada@example.com");

        assert!(!view.submit());
        assert_eq!(
            view.field_error(EmployeeField::Phone).as_deref(),
            Some("Phone is required")
        );
        tokio::task::yield_now().await;
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn test_field_errors_hidden_until_touched() {
        let api = FakeApi::with_employees(0);
        let mut view = FormView::activate(api, None);
        assert!(view.field_error(EmployeeField::Name).is_none());
        view.touch(EmployeeField::Name);
        assert_eq!(
            view.field_error(EmployeeField::Name).as_deref(),
            Some("Name is required")
        );
    }

    #[tokio::test]
    async fn test_edit_mode_prefills_and_updates() {
        let api = FakeApi::with_employees(5);
        let mut view = FormView::activate(api.clone(), Some(5));
        assert_eq!(view.mode(), FormMode::Edit(5));
        assert!(view.is_loading());

        settle(&mut view).await;
        assert!(!view.is_loading());
        assert_eq!(api.get_calls(), vec![5]);
        assert_eq!(view.draft().id, Some(5));
        assert_eq!(view.value(EmployeeField::Name), "Employee 5");

        view.set_value(EmployeeField::Phone, "555-9999");
        assert!(view.submit());
        settle(&mut view).await;

        let updated = api.updated();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, 5);
        assert_eq!(updated[0].1.id, Some(5));
        assert_eq!(updated[0].1.phone, "555-9999");
        assert!(api.created().is_empty());
        assert_eq!(view.success(), Some("Employee updated successfully"));
    }

    #[tokio::test]
    async fn test_edit_mode_load_failure() {
        let api = FakeApi::with_employees(1);
        let mut view = FormView::activate(api, Some(42));

        settle(&mut view).await;

        assert!(!view.is_loading());
        assert!(view.error().unwrap().contains("404"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_submits_once_then_redirects() {
        let api = FakeApi::with_employees(0);
        let mut view = FormView::activate(api.clone(), None);
        fill(&mut view, " Ada ", "555-0100", "ada@example.com");

        assert!(view.submit());
        // A second press while in flight is ignored
        assert!(!view.submit());
        assert!(view.is_loading());

        assert_eq!(settle(&mut view).await, None);
        assert!(!view.is_loading());
        assert_eq!(view.success(), Some("Employee created successfully"));
        assert!(!view.submit());

        let started = tokio::time::Instant::now();
        assert_eq!(settle(&mut view).await, Some(Route::List));
        assert!(started.elapsed() >= REDIRECT_DELAY);

        let created = api.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Ada");
        assert_eq!(created[0].id, None);
    }

    #[tokio::test]
    async fn test_blank_confirmation_uses_default_message() {
        let api = FakeApi::with_employees(0);
        api.set_confirmation("");
        let mut view = FormView::activate(api, None);
        fill(&mut view, "Ada", "555-0100", "ada@example.com");

        view.submit();
        settle(&mut view).await;

        assert_eq!(view.success(), Some("Employee added successfully!"));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let api = FakeApi::with_employees(0);
        api.fail_mutations();
        let mut view = FormView::activate(api, None);
        fill(&mut view, "Ada", "555-0100", "ada@example.com");

        view.submit();
        assert_eq!(settle(&mut view).await, None);

        assert!(!view.is_loading());
        assert!(view.error().unwrap().contains("500"));
        assert_eq!(view.success(), None);
        assert_eq!(view.value(EmployeeField::Name), "Ada");
        // The operator may retry
        assert!(view.submit());
    }

    #[tokio::test]
    async fn test_cancel_returns_to_list() {
        let api = FakeApi::with_employees(0);
        let view = FormView::activate(api.clone(), None);
        assert_eq!(view.cancel(), Route::List);
        assert!(api.created().is_empty());
    }
}
