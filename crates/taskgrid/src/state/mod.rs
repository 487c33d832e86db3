//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod add_form;
mod app;
mod notification;
mod task_table;

pub use add_form::{AddTaskFormState, FormField};
pub use app::AppState;
pub use notification::{Notification, NotificationState};
pub use task_table::{filtered_by, search_by, CellEdit, TaskTableState};
