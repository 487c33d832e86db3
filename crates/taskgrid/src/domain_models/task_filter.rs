//! Status filter for displaying only matching tasks

use super::Status;

/// Filter applied to the rendered task list.
///
/// Kept as its own type, separate from the search term, so the two can be
/// composed when deriving the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show all tasks (no filtering)
    #[default]
    All,
    /// Show only tasks with exactly this status
    Only(Status),
}

impl StatusFilter {
    /// Display label for the filter selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    /// Cycle through `All -> To Do -> In Progress -> Done -> All`
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(Status::ToDo),
            Self::Only(Status::ToDo) => Self::Only(Status::InProgress),
            Self::Only(Status::InProgress) => Self::Only(Status::Done),
            Self::Only(Status::Done) => Self::All,
        }
    }

    /// Does a task with this status pass the filter?
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}
