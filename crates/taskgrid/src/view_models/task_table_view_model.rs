//! View model for the task table view
//!
//! Pre-computes all display text and per-cell roles so the view only maps
//! them onto widgets. Everything here is derived from state on each frame,
//! including the filtered row set, the page window, and the badge counts.

use crate::config::PAGE_SIZE;
use crate::domain_models::{LoadingState, Status, Task, TaskField};
use crate::state::{AppState, CellEdit};
use chrono::{DateTime, Local};

/// How a single cell should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Normal,
    /// The cell under the cursor
    Selected,
    /// The cell with an open inline editor
    Editing,
}

/// One display-ready row of the current page
#[derive(Debug, Clone)]
pub struct TaskRowViewModel {
    /// Cell texts in column order: id, title, description, status
    pub cells: [String; 4],
    /// Cell roles, same order
    pub roles: [CellRole; 4],
}

/// View model for the entire task table screen
#[derive(Debug, Clone)]
pub struct TaskTableViewModel {
    /// Panel title: "Tasks (N)" with N the visible row count
    pub title: String,
    /// Status count badges over the full task list: (label, status)
    pub badges: Vec<(String, Status)>,
    /// Current status filter, e.g. "Filter: Done"
    pub filter_label: String,
    /// Search input line, present while searching or with a term applied
    pub search_line: Option<String>,
    /// Is the search input focused?
    pub search_active: bool,
    /// "Page 1/2"
    pub page_label: String,
    /// Rows of the current page only
    pub rows: Vec<TaskRowViewModel>,
    /// Cursor row as an index into `rows`
    pub selected_row: Option<usize>,
    /// Loading progress or error, shown instead of rows while pending
    pub loading_text: Option<String>,
    pub loading_failed: bool,
    /// Unexpired notification banner text
    pub notification: Option<String>,
}

impl TaskTableViewModel {
    /// Transform state into a display-ready view model
    pub fn from_state(state: &AppState, now: DateTime<Local>) -> Self {
        let table = &state.task_table;
        let visible = table.visible_tasks();

        let page_count = visible.len().div_ceil(PAGE_SIZE).max(1);
        let page = (table.selected / PAGE_SIZE).min(page_count - 1);
        let page_start = page * PAGE_SIZE;

        let rows = visible
            .iter()
            .copied()
            .enumerate()
            .skip(page_start)
            .take(PAGE_SIZE)
            .map(|(index, task)| {
                Self::build_row(
                    task,
                    index == table.selected,
                    table.selected_field,
                    table.editing.as_ref(),
                )
            })
            .collect();

        let selected_row = if visible.is_empty() {
            None
        } else {
            Some(table.selected - page_start)
        };

        let badges = Status::ALL
            .iter()
            .map(|&status| {
                let label = format!("{}: {}", status.label(), table.count_by_status(status));
                (label, status)
            })
            .collect();

        let search_line = if table.search_active || !table.search_term.is_empty() {
            Some(format!("/{}", table.search_term))
        } else {
            None
        };

        let (loading_text, loading_failed) = match &table.loading_state {
            LoadingState::Loading => (Some("Loading tasks...".to_string()), false),
            LoadingState::Error(err) => (Some(format!("Failed to load tasks: {err}")), true),
            LoadingState::Idle | LoadingState::Loaded => (None, false),
        };

        Self {
            title: format!("Tasks ({})", visible.len()),
            badges,
            filter_label: format!("Filter: {}", table.status_filter.label()),
            search_line,
            search_active: table.search_active,
            page_label: format!("Page {}/{}", page + 1, page_count),
            rows,
            selected_row,
            loading_text,
            loading_failed,
            notification: state.notification.visible(now).map(str::to_string),
        }
    }

    fn build_row(
        task: &Task,
        is_cursor: bool,
        cursor_field: TaskField,
        editing: Option<&CellEdit>,
    ) -> TaskRowViewModel {
        let mut cells = [
            task.id.to_string(),
            task.title.clone(),
            task.description.clone(),
            task.status.label().to_string(),
        ];
        let mut roles = [CellRole::Normal; 4];

        if is_cursor {
            roles[Self::column_of(cursor_field)] = CellRole::Selected;
        }

        // An open editor overrides the cell text with its live buffer
        if let Some(edit) = editing.filter(|e| e.task_id == task.id) {
            let column = Self::column_of(edit.field);
            cells[column] = match edit.field {
                TaskField::Status => format!("< {} >", edit.status.label()),
                TaskField::Title | TaskField::Description => format!("{}_", edit.buffer),
            };
            roles[column] = CellRole::Editing;
        }

        TaskRowViewModel { cells, roles }
    }

    /// The id column is read-only and sits before the editable columns
    fn column_of(field: TaskField) -> usize {
        match field {
            TaskField::Title => 1,
            TaskField::Description => 2,
            TaskField::Status => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, SeedAction, TaskAction};
    use crate::reducers::app_reducer;
    use crate::state::AppState;
    use pretty_assertions::assert_eq;
    use seed_client::SeedTodo;

    fn seeded(count: u64) -> AppState {
        let todos = (1..=count)
            .map(|id| SeedTodo {
                id,
                title: format!("todo {id}"),
                completed: id % 2 == 0,
            })
            .collect();
        app_reducer::reduce(AppState::default(), &Action::Seed(SeedAction::Loaded(todos)))
    }

    #[test]
    fn badges_count_the_full_list_not_the_page() {
        let state = seeded(15);
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert_eq!(vm.badges.len(), 3);
        assert_eq!(vm.badges[0].0, "To Do: 8");
        assert_eq!(vm.badges[1].0, "In Progress: 0");
        assert_eq!(vm.badges[2].0, "Done: 7");
    }

    #[test]
    fn first_page_holds_ten_rows() {
        let state = seeded(15);
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.page_label, "Page 1/2");
        assert_eq!(vm.title, "Tasks (15)");
        assert_eq!(vm.selected_row, Some(0));
    }

    #[test]
    fn cursor_past_the_first_page_shows_the_second_page() {
        let mut state = seeded(15);
        state.task_table.selected = 12;
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.page_label, "Page 2/2");
        assert_eq!(vm.selected_row, Some(2));
        assert_eq!(vm.rows[2].cells[0], "13");
    }

    #[test]
    fn empty_table_still_renders_one_page() {
        let vm = TaskTableViewModel::from_state(&AppState::default(), Local::now());

        assert_eq!(vm.page_label, "Page 1/1");
        assert_eq!(vm.selected_row, None);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn cursor_cell_is_marked_selected() {
        let mut state = seeded(3);
        state.task_table.selected = 1;
        state.task_table.selected_field = TaskField::Status;
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert_eq!(vm.rows[1].roles[3], CellRole::Selected);
        assert_eq!(vm.rows[0].roles[3], CellRole::Normal);
    }

    #[test]
    fn open_editor_overrides_the_cell_text() {
        let state = seeded(3);
        let state = app_reducer::reduce(state, &Action::Task(TaskAction::BeginEdit));
        let state = app_reducer::reduce(state, &Action::Task(TaskAction::EditChar('!')));
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert_eq!(vm.rows[0].roles[1], CellRole::Editing);
        assert_eq!(vm.rows[0].cells[1], "todo 1!_");
    }

    #[test]
    fn expired_notification_is_absent() {
        let now = Local::now();
        let mut state = seeded(1);
        state.notification.show("Task added successfully!", now);

        let fresh = TaskTableViewModel::from_state(&state, now);
        assert_eq!(fresh.notification.as_deref(), Some("Task added successfully!"));

        let later = now + chrono::Duration::seconds(5);
        let stale = TaskTableViewModel::from_state(&state, later);
        assert_eq!(stale.notification, None);
    }

    #[test]
    fn loading_error_is_surfaced() {
        let state = app_reducer::reduce(
            AppState::default(),
            &Action::Seed(SeedAction::LoadFailed("connection refused".into())),
        );
        let vm = TaskTableViewModel::from_state(&state, Local::now());

        assert!(vm.loading_failed);
        assert_eq!(
            vm.loading_text.as_deref(),
            Some("Failed to load tasks: connection refused")
        );
    }
}
