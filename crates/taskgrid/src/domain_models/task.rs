//! The task record and its mutation helpers

use super::Status;
use seed_client::SeedTodo;

/// A single task in the list.
///
/// Ids are kept contiguous (`1..=N`) by the delete path and are therefore
/// NOT stable identities: deleting a task renumbers everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl Task {
    /// Build a task from a seed record.
    ///
    /// The description is synthesized from the source id and the status is
    /// derived from the completion flag.
    pub fn from_seed(todo: &SeedTodo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: format!("Description for task {}", todo.id),
            status: Status::from_completed(todo.completed),
        }
    }

    /// Case-insensitive substring match against title OR description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    /// Merge a patch into this task, field by field
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Fields for a task about to be created via the add form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl TaskDraft {
    /// A draft is valid when title and description are non-blank after trimming
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Partial update applied by the inline cell editors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn status(value: Status) -> Self {
        Self {
            status: Some(value),
            ..Self::default()
        }
    }
}

/// Editable column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    #[default]
    Title,
    Description,
    Status,
}

impl TaskField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Status => "Status",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Status,
            Self::Status => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Status,
            Self::Description => Self::Title,
            Self::Status => Self::Description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seed(id: u64, completed: bool) -> SeedTodo {
        SeedTodo {
            id,
            title: format!("todo {id}"),
            completed,
        }
    }

    #[test]
    fn from_seed_synthesizes_description_and_status() {
        let task = Task::from_seed(&seed(3, false));
        assert_eq!(task.id, 3);
        assert_eq!(task.description, "Description for task 3");
        assert_eq!(task.status, Status::ToDo);

        let done = Task::from_seed(&seed(7, true));
        assert_eq!(done.status, Status::Done);
    }

    #[test]
    fn search_is_case_insensitive_over_both_text_fields() {
        let task = Task::from_seed(&seed(3, false));
        assert!(task.matches_search("TASK 3"));
        assert!(task.matches_search("Task 3"));
        assert!(task.matches_search("ToDo 3"));
        assert!(!task.matches_search("task 4"));
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let task = Task::from_seed(&seed(1, false));
        assert!(task.matches_search(""));
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut task = Task::from_seed(&seed(1, false));
        task.apply(&TaskPatch::status(Status::InProgress));
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.title, "todo 1");

        task.apply(&TaskPatch::title("renamed"));
        assert_eq!(task.title, "renamed");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn draft_validity_requires_non_blank_title_and_description() {
        let draft = TaskDraft {
            title: "  ".to_string(),
            description: "2%".to_string(),
            status: Status::ToDo,
        };
        assert!(!draft.is_valid());

        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: Status::ToDo,
        };
        assert!(draft.is_valid());
    }
}
