//! Seed fetch lifecycle actions

use seed_client::SeedTodo;

/// Actions for the one-shot startup seed load
#[derive(Debug, Clone)]
pub enum SeedAction {
    /// Kick off the fetch (dispatched exactly once at startup)
    LoadStart,
    /// The fetch resolved with raw seed records
    Loaded(Vec<SeedTodo>),
    /// The fetch failed; the list stays empty, nothing is retried
    LoadFailed(String),
}
