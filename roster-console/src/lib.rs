//! Roster Console - terminal client for employee records
//!
//! A list screen, a shared add/edit form and a not-found screen behind
//! URL-style routes, talking to the backend through `roster-client`.

pub mod app;
pub mod config;
pub mod logger;
pub mod router;
pub mod ui;
pub mod views;

#[cfg(test)]
mod testing;

pub use app::{App, AppEvent, Screen};
pub use config::Config;
pub use router::Route;
