//! Seed Middleware
//!
//! Handles the one side effect of the application: fetching the initial
//! batch of todos from the remote seed source. On `SeedAction::LoadStart`
//! a task is spawned on the internal runtime and the result comes back
//! through the dispatcher as `Loaded` or `LoadFailed`.

use crate::actions::{Action, SeedAction};
use crate::config;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use seed_client::SeedSource;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for loading seed todos from the remote source
pub struct SeedMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn SeedSource>,
}

impl SeedMiddleware {
    pub fn new(client: Arc<dyn SeedSource>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self { runtime, client }
    }
}

impl Middleware for SeedMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Seed(SeedAction::LoadStart) => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();

                log::info!("Spawning async task to load {} seed todos", config::SEED_LIMIT);
                self.runtime.spawn(async move {
                    match client.fetch_todos(config::SEED_LIMIT).await {
                        Ok(todos) => {
                            log::info!("Loaded {} seed todos", todos.len());
                            dispatcher.dispatch(Action::Seed(SeedAction::Loaded(todos)));
                        }
                        Err(e) => {
                            log::error!("Failed to load seed todos: {}", e);
                            dispatcher.dispatch(Action::Seed(SeedAction::LoadFailed(
                                e.to_string(),
                            )));
                        }
                    }
                });

                true // Let LoadStart pass through so the reducer marks loading
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_client::{SeedClientError, SeedTodo};
    use std::sync::mpsc;
    use std::time::Duration;

    struct StaticSource(Vec<SeedTodo>);

    #[async_trait::async_trait]
    impl SeedSource for StaticSource {
        async fn fetch_todos(&self, limit: usize) -> Result<Vec<SeedTodo>, SeedClientError> {
            let mut todos = self.0.clone();
            todos.truncate(limit);
            Ok(todos)
        }
    }

    #[test]
    fn load_start_dispatches_loaded_todos() {
        let todos = vec![SeedTodo {
            id: 1,
            title: "delectus aut autem".into(),
            completed: false,
        }];
        let mut middleware = SeedMiddleware::new(Arc::new(StaticSource(todos)));

        let (tx, rx) = mpsc::channel();
        let passed = middleware.handle(
            &Action::Seed(SeedAction::LoadStart),
            &AppState::default(),
            &Dispatcher::new(tx),
        );

        assert!(passed);
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(Action::Seed(SeedAction::Loaded(todos))) => assert_eq!(todos.len(), 1),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn other_actions_pass_through_untouched() {
        let mut middleware = SeedMiddleware::new(Arc::new(StaticSource(vec![])));
        let (tx, rx) = mpsc::channel();
        let passed = middleware.handle(
            &Action::Seed(SeedAction::LoadFailed("boom".into())),
            &AppState::default(),
            &Dispatcher::new(tx),
        );
        assert!(passed);
        assert!(rx.try_recv().is_err());
    }
}
