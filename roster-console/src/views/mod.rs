//! Screens of the console
//!
//! Each view owns its state and an event channel. Network calls run as
//! spawned tasks that post their result back on that channel; the shell
//! feeds the events to [`ListView::apply`] / [`FormView::apply`]. Dropping a
//! view cancels everything it started.

pub mod form;
pub mod list;
pub mod not_found;
pub mod switch;

use std::future::Future;

use roster_client::ClientError;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

pub use form::{FormEvent, FormMode, FormView};
pub use list::{ListEvent, ListView};
pub use not_found::NotFoundView;
pub use switch::{Switch, Ticket};

/// Run `request` in the background and post its event unless `token` fires first
pub(crate) fn spawn_request<E, F>(token: CancellationToken, tx: UnboundedSender<E>, request: F)
where
    E: Send + 'static,
    F: Future<Output = E> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = token.cancelled() => {}
            event = request => {
                // The receiving view may be gone already
                let _ = tx.send(event);
            }
        }
    });
}

/// Operator-facing text for a failed request
pub(crate) fn describe(err: &ClientError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
