//! Middleware - side effects live here, reducers stay pure

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard;
pub mod logging;
pub mod seed;

pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use seed::SeedMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: the action to process
    /// - `state`: current application state (read-only snapshot)
    /// - `dispatcher`: for dispatching actions that re-enter the loop
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
