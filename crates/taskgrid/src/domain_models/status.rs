//! Task status enumeration

use std::fmt;

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in display order (also the cycle order for editors)
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    /// Display label, matching the seed UI exactly
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Cycle to the next status (wraps)
    pub fn next(&self) -> Self {
        match self {
            Self::ToDo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// Cycle to the previous status (wraps)
    pub fn prev(&self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::InProgress => Self::ToDo,
            Self::Done => Self::InProgress,
        }
    }

    /// Derive a status from the seed API's boolean completion flag
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Done
        } else {
            Self::ToDo
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
