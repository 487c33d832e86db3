//! LoggingMiddleware - logs all actions for debugging

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Logs every action that passes through the system
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Raw key events are logged by the keyboard middleware once
        // translated; logging them twice is just noise.
        if !matches!(action, Action::Key(_)) {
            log::debug!("Action: {:?}", action);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use std::sync::mpsc;

    #[test]
    fn always_continues_the_chain() {
        let mut middleware = LoggingMiddleware::new();
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
    }
}
