//! Wildcard view for unmatched paths

use crate::router::Route;

pub const HEADING: &str = "404 - Page Not Found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path that matched nothing
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> String {
        format!("The page \"{}\" does not exist.", self.path)
    }

    /// Target of the "back to list" link
    pub fn back_link(&self) -> Route {
        Route::List
    }
}
