//! KeyboardMiddleware - translates key events into view-specific actions
//!
//! Raw `Action::Key` events are consumed here and re-dispatched as the
//! concrete action the active view understands. Routing depends on which
//! view is on top of the stack and, within the table view, on whether the
//! search input or a cell editor currently has focus.

use crate::actions::{Action, FormAction, GlobalAction, TaskAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, FormField};
use crate::views::ViewId;
use crate::domain_models::TaskField;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translates keyboard input for the active view
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Ctrl+C: emergency quit, works everywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        let view_id = state
            .active_view()
            .map(|v| v.view_id())
            .unwrap_or(ViewId::TaskTable);

        match view_id {
            ViewId::AddTask => self.handle_form_key(key, state, dispatcher),
            ViewId::TaskTable => self.handle_table_key(key, state, dispatcher),
        }
    }

    fn handle_form_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let on_status = state.add_form.focused_field == FormField::Status;
        let action = match key.code {
            KeyCode::Esc => Action::Form(FormAction::Cancel),
            KeyCode::Enter => Action::Form(FormAction::Submit),
            KeyCode::Tab | KeyCode::Down => Action::Form(FormAction::NextField),
            KeyCode::BackTab | KeyCode::Up => Action::Form(FormAction::PrevField),
            KeyCode::Backspace => Action::Form(FormAction::Backspace),
            KeyCode::Left | KeyCode::Right if on_status => Action::Form(FormAction::CycleStatus),
            KeyCode::Char(' ') if on_status => Action::Form(FormAction::CycleStatus),
            KeyCode::Char(c) => Action::Form(FormAction::Char(c)),
            _ => return,
        };
        dispatcher.dispatch(action);
    }

    fn handle_table_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let table = &state.task_table;

        // An open cell editor captures everything first
        if let Some(edit) = &table.editing {
            let on_status = matches!(edit.field, TaskField::Status);
            let action = match key.code {
                KeyCode::Esc => Action::Task(TaskAction::CancelEdit),
                KeyCode::Enter => Action::Task(TaskAction::CommitEdit),
                KeyCode::Backspace => Action::Task(TaskAction::EditBackspace),
                KeyCode::Left | KeyCode::Right if on_status => {
                    Action::Task(TaskAction::EditCycleStatus)
                }
                KeyCode::Char(' ') if on_status => Action::Task(TaskAction::EditCycleStatus),
                KeyCode::Char(c) => Action::Task(TaskAction::EditChar(c)),
                _ => return,
            };
            dispatcher.dispatch(action);
            return;
        }

        // Focused search input: live filtering on every keystroke
        if table.search_active {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => Action::Task(TaskAction::SearchClose),
                KeyCode::Backspace => Action::Task(TaskAction::SearchBackspace),
                KeyCode::Char(c) => Action::Task(TaskAction::SearchChar(c)),
                _ => return,
            };
            dispatcher.dispatch(action);
            return;
        }

        let action = match key.code {
            KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
            KeyCode::Esc => Action::Global(GlobalAction::Close),
            KeyCode::Char('a') => Action::Form(FormAction::Open),
            KeyCode::Char('d') => {
                // Resolve the row under the cursor to its id here; the
                // store operation is strictly delete-by-id.
                match table.selected_task() {
                    Some(task) => Action::Task(TaskAction::Delete(task.id)),
                    None => return,
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => Action::Task(TaskAction::BeginEdit),
            KeyCode::Char('/') => Action::Task(TaskAction::SearchOpen),
            KeyCode::Char('f') => Action::Task(TaskAction::CycleStatusFilter),
            KeyCode::Char('j') | KeyCode::Down => Action::Task(TaskAction::NavigateNext),
            KeyCode::Char('k') | KeyCode::Up => Action::Task(TaskAction::NavigatePrevious),
            KeyCode::Char('g') => Action::Task(TaskAction::NavigateToTop),
            KeyCode::Char('G') => Action::Task(TaskAction::NavigateToBottom),
            KeyCode::PageDown => Action::Task(TaskAction::PageNext),
            KeyCode::PageUp => Action::Task(TaskAction::PagePrevious),
            KeyCode::Char('h') | KeyCode::Left => Action::Task(TaskAction::ColumnPrevious),
            KeyCode::Char('l') | KeyCode::Right => Action::Task(TaskAction::ColumnNext),
            _ => return,
        };
        dispatcher.dispatch(action);
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Key(key) => {
                self.handle_key(*key, state, dispatcher);
                false // Raw keys never reach the reducer
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SeedAction;
    use crate::reducers::app_reducer;
    use seed_client::SeedTodo;
    use std::sync::mpsc::{self, Receiver};

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn translate(state: &AppState, action: Action) -> (bool, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let passed = middleware.handle(&action, state, &Dispatcher::new(tx));
        (passed, rx)
    }

    fn seeded(count: u64) -> AppState {
        let todos = (1..=count)
            .map(|id| SeedTodo {
                id,
                title: format!("todo {id}"),
                completed: false,
            })
            .collect();
        app_reducer::reduce(AppState::default(), &Action::Seed(SeedAction::Loaded(todos)))
    }

    #[test]
    fn raw_keys_are_consumed() {
        let (passed, _rx) = translate(&AppState::default(), key(KeyCode::Char('q')));
        assert!(!passed);
    }

    #[test]
    fn non_key_actions_pass_through() {
        let (passed, _rx) = translate(
            &AppState::default(),
            Action::Global(GlobalAction::Quit),
        );
        assert!(passed);
    }

    #[test]
    fn q_quits_from_the_table_view() {
        let (_, rx) = translate(&AppState::default(), key(KeyCode::Char('q')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Global(GlobalAction::Quit))
        ));
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let state = app_reducer::reduce(AppState::default(), &Action::Form(FormAction::Open));
        let action = Action::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let (_, rx) = translate(&state, action);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Global(GlobalAction::Quit))
        ));
    }

    #[test]
    fn d_resolves_the_selected_row_to_a_delete_by_id() {
        let mut state = seeded(3);
        state.task_table.selected = 1;
        let (_, rx) = translate(&state, key(KeyCode::Char('d')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Task(TaskAction::Delete(2)))
        ));
    }

    #[test]
    fn d_on_an_empty_table_dispatches_nothing() {
        let (_, rx) = translate(&AppState::default(), key(KeyCode::Char('d')));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn typing_routes_to_the_form_when_it_is_open() {
        let state = app_reducer::reduce(AppState::default(), &Action::Form(FormAction::Open));
        let (_, rx) = translate(&state, key(KeyCode::Char('x')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Form(FormAction::Char('x')))
        ));
    }

    #[test]
    fn typing_routes_to_search_while_it_is_focused() {
        let mut state = seeded(3);
        state.task_table.search_active = true;
        let (_, rx) = translate(&state, key(KeyCode::Char('x')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Task(TaskAction::SearchChar('x')))
        ));
    }

    #[test]
    fn typing_routes_to_an_open_cell_editor() {
        let state = seeded(3);
        let state = app_reducer::reduce(state, &Action::Task(TaskAction::BeginEdit));
        assert!(state.task_table.editing.is_some());

        let (_, rx) = translate(&state, key(KeyCode::Char('x')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Task(TaskAction::EditChar('x')))
        ));
    }

    #[test]
    fn space_cycles_the_status_cell_editor() {
        let mut state = seeded(3);
        state.task_table.selected_field = TaskField::Status;
        let state = app_reducer::reduce(state, &Action::Task(TaskAction::BeginEdit));

        let (_, rx) = translate(&state, key(KeyCode::Char(' ')));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Task(TaskAction::EditCycleStatus))
        ));
    }
}
