//! Store - holds application state and manages the Redux loop

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Store - central state container
///
/// Actions pass through the middleware chain first (side effects,
/// key translation); whatever is not consumed reaches the pure reducer.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: AppState, dispatcher: Dispatcher) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
        }
    }

    /// Add middleware to the store (executes in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}
