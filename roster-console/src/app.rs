//! Navigation shell
//!
//! Owns the single active screen. Navigating drops the previous screen,
//! which cancels whatever it still had in flight.

use std::sync::Arc;

use roster_client::EmployeeApi;

use crate::router::Route;
use crate::views::{FormEvent, FormView, ListEvent, ListView, NotFoundView};

pub const TITLE: &str = "Employee Management";

/// The active screen
pub enum Screen {
    List(ListView),
    Form(FormView),
    NotFound(NotFoundView),
}

impl Screen {
    fn activate(api: &Arc<dyn EmployeeApi>, route: &Route) -> Self {
        match route {
            Route::List => Self::List(ListView::activate(Arc::clone(api))),
            Route::Add | Route::Edit(_) => {
                Self::Form(FormView::activate(Arc::clone(api), route.id_param()))
            }
            Route::NotFound(path) => Self::NotFound(NotFoundView::new(path.clone())),
        }
    }
}

/// Event from the active screen's background work
#[derive(Debug)]
pub enum AppEvent {
    List(ListEvent),
    Form(FormEvent),
}

pub struct App {
    api: Arc<dyn EmployeeApi>,
    route: Route,
    screen: Screen,
    running: bool,
}

impl App {
    /// Start at `start_path`; unmatched paths land on the not-found view
    pub fn new(api: Arc<dyn EmployeeApi>, start_path: &str) -> Self {
        let route = Route::parse(start_path);
        tracing::info!(path = %route, "Starting console");
        let screen = Screen::activate(&api, &route);
        Self {
            api,
            route,
            screen,
            running: true,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.route, to = %route, "Navigating");
        self.screen = Screen::activate(&self.api, &route);
        self.route = route;
    }

    pub fn navigate_to(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Wait for the active screen's next event. The not-found view has no
    /// background work, so this never resolves there.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        match &mut self.screen {
            Screen::List(view) => view.next_event().await.map(AppEvent::List),
            Screen::Form(view) => view.next_event().await.map(AppEvent::Form),
            Screen::NotFound(_) => std::future::pending().await,
        }
    }

    pub fn try_next_event(&mut self) -> Option<AppEvent> {
        match &mut self.screen {
            Screen::List(view) => view.try_next_event().map(AppEvent::List),
            Screen::Form(view) => view.try_next_event().map(AppEvent::Form),
            Screen::NotFound(_) => None,
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        let next = match (&mut self.screen, event) {
            (Screen::List(view), AppEvent::List(event)) => {
                view.apply(event);
                None
            }
            (Screen::Form(view), AppEvent::Form(event)) => view.apply(event),
            (_, event) => {
                tracing::debug!(?event, "Dropping event for an inactive screen");
                None
            }
        };
        if let Some(route) = next {
            self.navigate(route);
        }
    }

    /// Apply every event already queued; returns how many there were
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.try_next_event() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        tracing::info!("Quitting console");
        self.running = false;
    }
}
