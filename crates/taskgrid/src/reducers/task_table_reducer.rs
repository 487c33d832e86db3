//! Task table reducer
//!
//! Pure functions over `TaskTableState`: the list mutations (add, update,
//! delete, seed load), cursor movement, search, filter and the inline
//! cell editor.

use crate::actions::{SeedAction, TaskAction};
use crate::config::{PAGE_SIZE, SEED_LIMIT};
use crate::domain_models::{LoadingState, Task, TaskField, TaskPatch};
use crate::state::{CellEdit, TaskTableState};

/// Reduce task table state based on task actions
pub fn reduce(mut state: TaskTableState, action: &TaskAction) -> TaskTableState {
    match action {
        TaskAction::Add(draft) => {
            // The add form validates before submitting, but the store
            // enforces the rule too: a blank title or description never
            // changes the list.
            if !draft.is_valid() {
                log::debug!("Add rejected: blank title or description");
                return state;
            }
            let id = state.tasks.len() as u64 + 1;
            state.tasks.push(Task {
                id,
                title: draft.title.clone(),
                description: draft.description.clone(),
                status: draft.status,
            });
            log::info!("Added task #{id}");
        }

        TaskAction::Update { id, patch } => {
            apply_update(&mut state, *id, patch);
            clamp_selection(&mut state);
        }

        TaskAction::Delete(id) => {
            let before = state.tasks.len();
            state.tasks.retain(|t| t.id != *id);
            if state.tasks.len() == before {
                log::debug!("Delete: no task with id {id}");
                return state;
            }
            // Renumber densely: ids are positions, not identities.
            for (index, task) in state.tasks.iter_mut().enumerate() {
                task.id = index as u64 + 1;
            }
            // Any open editor holds a now-unreliable id.
            state.editing = None;
            clamp_selection(&mut state);
            log::info!("Deleted task #{id}, {} remain", state.tasks.len());
        }

        // Cursor movement over the visible rows, wrapping at both ends
        TaskAction::NavigateNext => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.selected = (state.selected + 1) % len;
            }
        }
        TaskAction::NavigatePrevious => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.selected = if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
            }
        }
        TaskAction::NavigateToTop => {
            state.selected = 0;
        }
        TaskAction::NavigateToBottom => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.selected = len - 1;
            }
        }
        TaskAction::PageNext => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.selected = (state.selected + PAGE_SIZE).min(len - 1);
            }
        }
        TaskAction::PagePrevious => {
            state.selected = state.selected.saturating_sub(PAGE_SIZE);
        }
        TaskAction::ColumnNext => {
            state.selected_field = state.selected_field.next();
        }
        TaskAction::ColumnPrevious => {
            state.selected_field = state.selected_field.prev();
        }

        // Changing filter or search rebuilds the rows from scratch; the
        // cursor and any open editor cannot survive the change.
        TaskAction::CycleStatusFilter => {
            state.status_filter = state.status_filter.next();
            state.selected = 0;
            state.editing = None;
        }
        TaskAction::SearchOpen => {
            state.search_active = true;
            state.editing = None;
        }
        TaskAction::SearchClose => {
            state.search_active = false;
        }
        TaskAction::SearchChar(c) => {
            state.search_term.push(*c);
            state.selected = 0;
        }
        TaskAction::SearchBackspace => {
            state.search_term.pop();
            state.selected = 0;
        }

        // Inline cell editing: Viewing -> Editing -> Viewing
        TaskAction::BeginEdit => {
            if let Some(task) = state.selected_task() {
                let buffer = match state.selected_field {
                    TaskField::Title => task.title.clone(),
                    TaskField::Description => task.description.clone(),
                    TaskField::Status => String::new(),
                };
                state.editing = Some(CellEdit {
                    task_id: task.id,
                    field: state.selected_field,
                    buffer,
                    status: task.status,
                });
            }
        }
        TaskAction::EditChar(c) => {
            if let Some(edit) = &mut state.editing {
                if !matches!(edit.field, TaskField::Status) {
                    edit.buffer.push(*c);
                }
            }
        }
        TaskAction::EditBackspace => {
            if let Some(edit) = &mut state.editing {
                if !matches!(edit.field, TaskField::Status) {
                    edit.buffer.pop();
                }
            }
        }
        TaskAction::EditCycleStatus => {
            if let Some(edit) = &mut state.editing {
                if matches!(edit.field, TaskField::Status) {
                    edit.status = edit.status.next();
                }
            }
        }
        TaskAction::CommitEdit => {
            // Commit always updates; the inline editors accept any text,
            // unlike the add form.
            if let Some(edit) = state.editing.take() {
                let patch = match edit.field {
                    TaskField::Title => TaskPatch::title(edit.buffer),
                    TaskField::Description => TaskPatch::description(edit.buffer),
                    TaskField::Status => TaskPatch::status(edit.status),
                };
                apply_update(&mut state, edit.task_id, &patch);
                clamp_selection(&mut state);
            }
        }
        TaskAction::CancelEdit => {
            state.editing = None;
        }
    }

    state
}

/// Reduce task table state based on seed fetch actions
pub fn reduce_seed(mut state: TaskTableState, action: &SeedAction) -> TaskTableState {
    match action {
        SeedAction::LoadStart => {
            state.loading_state = LoadingState::Loading;
        }
        SeedAction::Loaded(todos) => {
            state.tasks = todos.iter().take(SEED_LIMIT).map(Task::from_seed).collect();
            state.loading_state = LoadingState::Loaded;
            state.selected = 0;
            log::info!("Seed load complete: {} tasks", state.tasks.len());
        }
        SeedAction::LoadFailed(error) => {
            // Terminal: no retry, no user-visible error. The table simply
            // stays empty.
            state.loading_state = LoadingState::Error(error.clone());
            log::warn!("Seed load failed: {error}");
        }
    }

    state
}

/// Merge a patch into the matching task; silent no-op when no task matches
fn apply_update(state: &mut TaskTableState, id: u64, patch: &TaskPatch) {
    match state.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => task.apply(patch),
        None => log::debug!("Update: no task with id {id}"),
    }
}

/// Keep the cursor inside the visible rows after a mutation
fn clamp_selection(state: &mut TaskTableState) {
    let len = state.visible_tasks().len();
    state.selected = state.selected.min(len.saturating_sub(1));
}
