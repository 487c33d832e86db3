//! Seed source trait
//!
//! Defines the interface for obtaining seed todos. The production
//! implementation talks HTTP; tests provide canned data.

use crate::error::SeedClientError;
use crate::types::SeedTodo;
use async_trait::async_trait;

/// Source of seed todo records
///
/// Implementations must be `Send + Sync` so the fetch can run on the
/// middleware's async runtime.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch at most `limit` todo records.
    ///
    /// Implementations must never return more than `limit` records, even
    /// when the backing collection is larger.
    async fn fetch_todos(&self, limit: usize) -> Result<Vec<SeedTodo>, SeedClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Canned in-memory source used to exercise trait-object call sites
    struct StaticSeedSource {
        todos: Vec<SeedTodo>,
    }

    #[async_trait]
    impl SeedSource for StaticSeedSource {
        async fn fetch_todos(&self, limit: usize) -> Result<Vec<SeedTodo>, SeedClientError> {
            let mut todos = self.todos.clone();
            todos.truncate(limit);
            Ok(todos)
        }
    }

    fn todo(id: u64) -> SeedTodo {
        SeedTodo {
            id,
            title: format!("todo {id}"),
            completed: id % 2 == 0,
        }
    }

    #[tokio::test]
    async fn trait_object_respects_limit() {
        let source: Box<dyn SeedSource> = Box::new(StaticSeedSource {
            todos: (1..=25).map(todo).collect(),
        });

        let todos = source.fetch_todos(20).await.unwrap();
        assert_eq!(todos.len(), 20);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[19].id, 20);
    }

    #[tokio::test]
    async fn short_collections_come_back_whole() {
        let source = StaticSeedSource {
            todos: (1..=3).map(todo).collect(),
        };

        let todos = source.fetch_todos(20).await.unwrap();
        assert_eq!(todos.len(), 3);
    }
}
