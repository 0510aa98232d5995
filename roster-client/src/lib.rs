//! Roster Client - access layer for the employee REST API
//!
//! Translates HTTP calls into typed results. Every transport failure or
//! non-2xx response surfaces as a [`ClientError`] with a readable message.

pub mod config;
pub mod employee;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use employee::{EmployeeApi, EmployeeService};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use reqwest::StatusCode;

// Re-export shared types for convenience
pub use shared::{Confirmation, Employee, EmployeeField, FieldErrors};
