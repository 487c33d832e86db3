//! Root reducer
//!
//! Pure function that produces new state from current state + action.
//! Handles global actions and the cross-slice transitions (form submit,
//! delete notification), then delegates to the per-slice reducers.

use crate::actions::{Action, FormAction, GlobalAction, TaskAction};
use crate::reducers::{add_form_reducer, task_table_reducer};
use crate::state::AppState;
use crate::views::{AddTaskView, ViewId};
use chrono::Local;

/// Root reducer - orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }

        Action::Global(GlobalAction::Close) => {
            // Pop the top-most view; quitting when only the base view remains
            if state.view_stack.len() > 1 {
                state.view_stack.pop();
            } else {
                state.running = false;
            }
            return state;
        }

        Action::Form(FormAction::Open) => {
            // Guard against stacking two forms
            let already_open = state
                .view_stack
                .last()
                .is_some_and(|v| v.view_id() == ViewId::AddTask);
            if !already_open {
                state.add_form.reset();
                state.view_stack.push(Box::new(AddTaskView::new()));
            }
            return state;
        }

        Action::Form(FormAction::Cancel) => {
            state.add_form.reset();
            if state.view_stack.len() > 1 {
                state.view_stack.pop();
            }
            return state;
        }

        Action::Form(FormAction::Submit) => {
            let draft = state.add_form.to_draft();
            if !draft.is_valid() {
                // Blocking validation: the form stays open with the message
                state.add_form.error = Some("Please fill in all fields".to_string());
                return state;
            }
            state.task_table =
                task_table_reducer::reduce(state.task_table, &TaskAction::Add(draft));
            state.add_form.reset();
            if state.view_stack.len() > 1 {
                state.view_stack.pop();
            }
            state
                .notification
                .show("Task added successfully!", Local::now());
            return state;
        }

        Action::Task(TaskAction::Delete(id)) => {
            // Notify only when something was actually removed
            let existed = state.task_table.tasks.iter().any(|t| t.id == *id);
            state.task_table =
                task_table_reducer::reduce(state.task_table, &TaskAction::Delete(*id));
            if existed {
                state
                    .notification
                    .show("Task deleted successfully!", Local::now());
            }
            return state;
        }

        _ => {}
    }

    // Delegate the remaining tagged actions to their slice reducers
    match action {
        Action::Task(task_action) => {
            state.task_table = task_table_reducer::reduce(state.task_table, task_action);
        }
        Action::Seed(seed_action) => {
            state.task_table = task_table_reducer::reduce_seed(state.task_table, seed_action);
        }
        Action::Form(form_action) => {
            state.add_form = add_form_reducer::reduce(state.add_form, form_action);
        }
        Action::Key(_) | Action::Global(_) => {}
    }

    state
}
