//! Data models
//!
//! Shared between the console client and the mock backend (via the REST API).
//! IDs are `i64` and assigned by the backend.

pub mod employee;

// Re-exports
pub use employee::{Employee, EmployeeField, FieldErrors};
