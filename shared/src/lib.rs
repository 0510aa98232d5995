//! Shared types for Roster
//!
//! The employee model, its field validation, the plain-text confirmation
//! returned by mutations, and the REST paths. Used by both the console
//! client and the mock backend.

pub mod models;
pub mod paths;
pub mod response;

// Re-exports
pub use models::{Employee, EmployeeField, FieldErrors};
pub use response::Confirmation;
pub use serde::{Deserialize, Serialize};
