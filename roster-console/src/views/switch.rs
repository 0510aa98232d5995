//! Switch-style request tracking
//!
//! Starting a request of one kind abandons the previous one still in flight:
//! its task is cancelled and, should its result be posted anyway, the
//! generation check rejects it.

use tokio_util::sync::CancellationToken;

/// Handle for one started request
#[derive(Debug, Clone)]
pub struct Ticket {
    pub generation: u64,
    pub token: CancellationToken,
}

/// Tracks the newest request of one kind
#[derive(Debug, Default)]
pub struct Switch {
    generation: u64,
    current: Option<CancellationToken>,
}

impl Switch {
    /// Start a new request under `scope`, cancelling the one in flight
    pub fn begin(&mut self, scope: &CancellationToken) -> Ticket {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        self.generation += 1;
        let token = scope.child_token();
        self.current = Some(token.clone());
        Ticket {
            generation: self.generation,
            token,
        }
    }

    /// Accept a result; false when it belongs to a superseded request
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// A request is started and not yet finished
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_cancels_older() {
        let scope = CancellationToken::new();
        let mut switch = Switch::default();

        let first = switch.begin(&scope);
        let second = switch.begin(&scope);

        assert!(first.token.is_cancelled());
        assert!(!second.token.is_cancelled());
        assert!(!switch.finish(first.generation));
        assert!(switch.in_flight());
        assert!(switch.finish(second.generation));
        assert!(!switch.in_flight());
    }

    #[test]
    fn test_result_is_accepted_once() {
        let scope = CancellationToken::new();
        let mut switch = Switch::default();
        let ticket = switch.begin(&scope);
        assert!(switch.finish(ticket.generation));
        assert!(!switch.finish(ticket.generation));
    }

    #[test]
    fn test_scope_cancels_current() {
        let scope = CancellationToken::new();
        let mut switch = Switch::default();
        let ticket = switch.begin(&scope);
        scope.cancel();
        assert!(ticket.token.is_cancelled());
    }
}
