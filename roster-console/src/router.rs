//! Client-side routes
//!
//! Paths keep the URL shape of the web client: `/employees`,
//! `/employees/add`, `/employees/edit/{id}`, and a wildcard for the rest.

use std::fmt;

/// Default route; the empty path redirects here.
pub const LIST_PATH: &str = "/employees";
pub const ADD_PATH: &str = "/employees/add";

/// A resolved navigation target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// Employee table
    #[default]
    List,
    /// Empty form, create mode
    Add,
    /// Pre-filled form, edit mode
    Edit(i64),
    /// Anything unmatched; keeps the requested path for display
    NotFound(String),
}

impl Route {
    /// Resolve a path. Trailing slashes are ignored and the empty path
    /// redirects to the list.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["employees"] => Self::List,
            ["employees", "add"] => Self::Add,
            ["employees", "edit", id] => match id.parse::<i64>() {
                Ok(id) => Self::Edit(id),
                Err(_) => Self::NotFound(trimmed.to_string()),
            },
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::Add => ADD_PATH.to_string(),
            Self::Edit(id) => format!("/employees/edit/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Id route parameter, present only on the edit route
    pub fn id_param(&self) -> Option<i64> {
        match self {
            Self::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
