//! Wire types for the seed endpoint

use serde::{Deserialize, Serialize};

/// A single todo record as returned by the seed endpoint.
///
/// The endpoint returns more fields than we need (`userId` among them);
/// serde silently drops whatever is not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTodo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_record_with_extra_fields() {
        let json = r#"{"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": false}"#;
        let todo: SeedTodo = serde_json::from_str(json).unwrap();
        assert_eq!(
            todo,
            SeedTodo {
                id: 3,
                title: "fugiat veniam minus".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn deserializes_full_collection() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 2, "title": "quis ut nam", "completed": true}
        ]"#;
        let todos: Vec<SeedTodo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos[1].completed);
    }
}
