//! Add-task form state

use crate::domain_models::{Status, TaskDraft};

/// Form field for the add-task dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
}

impl FormField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Status,
            Self::Status => Self::Title,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Status,
            Self::Description => Self::Title,
            Self::Status => Self::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Status => "Status",
        }
    }
}

/// State for the add-task form
#[derive(Debug, Clone, Default)]
pub struct AddTaskFormState {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub focused_field: FormField,
    /// Blocking validation message; cleared on the next input
    pub error: Option<String>,
}

impl AddTaskFormState {
    /// Reset the form to its default state
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.status = Status::default();
        self.focused_field = FormField::default();
        self.error = None;
    }

    /// The draft this form would submit
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_focus_cycles_both_ways() {
        assert_eq!(FormField::Title.next(), FormField::Description);
        assert_eq!(FormField::Status.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Status);
    }

    #[test]
    fn reset_clears_text_error_and_focus() {
        let mut form = AddTaskFormState {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: Status::Done,
            focused_field: FormField::Status,
            error: Some("Please fill in all fields".to_string()),
        };
        form.reset();
        assert!(form.title.is_empty());
        assert!(form.error.is_none());
        assert_eq!(form.focused_field, FormField::Title);
        assert_eq!(form.status, Status::ToDo);
    }
}
