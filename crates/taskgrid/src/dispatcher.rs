//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the
//! dispatch loop (the seed fetch resolving on its async runtime), it uses
//! the Dispatcher. The main loop drains the channel and feeds each action
//! back through the store.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the dispatch loop
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher over the action channel owned by the main loop
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed on the next loop iteration
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
