//! Add-task form reducer
//!
//! Handles keystrokes inside the form. Open/Submit/Cancel touch the view
//! stack and the task list, so those live in `app_reducer`.

use crate::actions::FormAction;
use crate::state::{AddTaskFormState, FormField};

/// Reduce add-task form state based on form actions
pub fn reduce(mut state: AddTaskFormState, action: &FormAction) -> AddTaskFormState {
    match action {
        FormAction::Char(c) => {
            match state.focused_field {
                FormField::Title => state.title.push(*c),
                FormField::Description => state.description.push(*c),
                FormField::Status => {}
            }
            // Any input dismisses the validation message
            state.error = None;
        }

        FormAction::Backspace => {
            match state.focused_field {
                FormField::Title => {
                    state.title.pop();
                }
                FormField::Description => {
                    state.description.pop();
                }
                FormField::Status => {}
            }
            state.error = None;
        }

        FormAction::NextField => {
            state.focused_field = state.focused_field.next();
        }

        FormAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }

        FormAction::CycleStatus => {
            // Only the status field has a choice to cycle
            if state.focused_field == FormField::Status {
                state.status = state.status.next();
            }
        }

        // Open/Submit/Cancel: view stack and task list handled in app_reducer
        FormAction::Open | FormAction::Submit | FormAction::Cancel => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Status;
    use pretty_assertions::assert_eq;

    fn typed(state: AddTaskFormState, text: &str) -> AddTaskFormState {
        text.chars()
            .fold(state, |s, c| reduce(s, &FormAction::Char(c)))
    }

    #[test]
    fn characters_land_in_the_focused_field() {
        let state = typed(AddTaskFormState::default(), "Buy milk");
        assert_eq!(state.title, "Buy milk");

        let state = reduce(state, &FormAction::NextField);
        let state = typed(state, "2%");
        assert_eq!(state.description, "2%");
        assert_eq!(state.title, "Buy milk");
    }

    #[test]
    fn backspace_edits_the_focused_field() {
        let state = typed(AddTaskFormState::default(), "Buyy");
        let state = reduce(state, &FormAction::Backspace);
        assert_eq!(state.title, "Buy");
    }

    #[test]
    fn status_cycles_only_while_the_status_field_is_focused() {
        let state = reduce(AddTaskFormState::default(), &FormAction::CycleStatus);
        assert_eq!(state.status, Status::ToDo);

        let mut state = AddTaskFormState::default();
        state.focused_field = FormField::Status;
        let state = reduce(state, &FormAction::CycleStatus);
        assert_eq!(state.status, Status::InProgress);
    }

    #[test]
    fn typing_clears_a_pending_validation_error() {
        let mut state = AddTaskFormState::default();
        state.error = Some("Please fill in all fields".to_string());
        let state = reduce(state, &FormAction::Char('a'));
        assert!(state.error.is_none());
    }

    #[test]
    fn text_keys_do_not_leak_into_the_status_field() {
        let mut state = AddTaskFormState::default();
        state.focused_field = FormField::Status;
        let state = typed(state, "xyz");
        assert!(state.title.is_empty());
        assert!(state.description.is_empty());
    }
}
