//! Task table state and its derived views
//!
//! This is the single authoritative owner of the task list. Everything the
//! table renders (status counts, filtered/searched subset) is derived from
//! here on every frame, never cached.

use crate::domain_models::{LoadingState, Status, StatusFilter, Task, TaskField};

/// In-flight inline edit of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    /// Id of the task being edited (looked up again on commit)
    pub task_id: u64,
    /// Which column the editor is open on
    pub field: TaskField,
    /// Text buffer for title/description editors
    pub buffer: String,
    /// Current choice for the status editor
    pub status: Status,
}

/// State of the task table screen
#[derive(Debug, Clone, Default)]
pub struct TaskTableState {
    /// The authoritative task list
    pub tasks: Vec<Task>,
    /// Where the one-shot seed fetch stands
    pub loading_state: LoadingState,
    /// Cursor position, as an index into the visible rows
    pub selected: usize,
    /// Column the cursor is on
    pub selected_field: TaskField,
    /// Status filter applied to the rendered rows
    pub status_filter: StatusFilter,
    /// Live search term (composed with the status filter, not merged into it)
    pub search_term: String,
    /// Is the search input focused?
    pub search_active: bool,
    /// Inline cell editor, when one is open
    pub editing: Option<CellEdit>,
}

impl TaskTableState {
    /// Count of tasks with exactly this status (recomputed per render)
    pub fn count_by_status(&self, status: Status) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// The rows the table shows: status filter and search composed,
    /// original order preserved
    pub fn visible_tasks(&self) -> Vec<&Task> {
        search_by(filtered_by(&self.tasks, self.status_filter), &self.search_term)
    }

    /// Task under the cursor, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }
}

/// Identity for `All`, exact status match otherwise
pub fn filtered_by(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t.status)).collect()
}

/// Case-insensitive substring match on title OR description; an empty
/// term passes everything through unchanged
pub fn search_by<'a>(tasks: Vec<&'a Task>, term: &str) -> Vec<&'a Task> {
    if term.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|t| t.matches_search(term))
        .collect()
}
