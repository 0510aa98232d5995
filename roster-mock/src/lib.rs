//! Roster Mock - in-memory employee backend
//!
//! Implements the `/employees` REST contract the console consumes, for local
//! runs and integration tests. Nothing is persisted.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use config::Config;
pub use error::MockError;
pub use state::MockState;

/// Build the application router
pub fn router(state: Arc<MockState>) -> Router {
    api::router().with_state(state)
}

/// Serve the mock backend on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: Arc<MockState>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Mock employee backend listening");
    }
    axum::serve(listener, router(state)).await
}
