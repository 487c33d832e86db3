//! Application State

use crate::theme::Theme;
use crate::views::{TaskTableView, View};

use super::{AddTaskFormState, NotificationState, TaskTableState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub task_table: TaskTableState,
    pub add_form: AddTaskFormState,
    pub notification: NotificationState,
    pub theme: Theme,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("task_table", &self.task_table)
            .field("add_form", &self.add_form)
            .field("notification", &self.notification)
            .field("theme", &"<theme>")
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            task_table: self.task_table.clone(),
            add_form: self.add_form.clone(),
            notification: self.notification.clone(),
            theme: self.theme.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(TaskTableView::new())],
            task_table: TaskTableState::default(),
            add_form: AddTaskFormState::default(),
            notification: NotificationState::default(),
            theme: Theme::default(),
        }
    }
}
