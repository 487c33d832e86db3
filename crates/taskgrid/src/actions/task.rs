//! Task table actions
//!
//! Mutations, cursor movement, search, filter and the inline cell editor.

use crate::domain_models::{TaskDraft, TaskPatch};

/// Actions for the task table screen
#[derive(Debug, Clone)]
pub enum TaskAction {
    // Store mutations
    /// Append a new task built from the add form
    Add(TaskDraft),
    /// Merge a patch into the task with this id (no-op when missing)
    Update { id: u64, patch: TaskPatch },
    /// Remove the task with this id, then renumber the rest (no-op when missing)
    Delete(u64),

    // Cursor movement (over the visible rows)
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    PageNext,
    PagePrevious,
    ColumnNext,
    ColumnPrevious,

    // Filter and search
    /// Cycle the status filter: All -> To Do -> In Progress -> Done -> All
    CycleStatusFilter,
    /// Focus the search input
    SearchOpen,
    /// Leave the search input (the term keeps filtering)
    SearchClose,
    /// Live search: one typed character
    SearchChar(char),
    /// Live search: backspace
    SearchBackspace,

    // Inline cell editing
    /// Start editing the selected cell
    BeginEdit,
    EditChar(char),
    EditBackspace,
    /// Cycle the status value while editing the status cell
    EditCycleStatus,
    /// Commit the edit buffer as an update (no validation on this path)
    CommitEdit,
    CancelEdit,
}
