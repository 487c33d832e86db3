//! Domain models shared across state, reducers and views

mod loading_state;
mod status;
mod task;
mod task_filter;

pub use loading_state::LoadingState;
pub use status::Status;
pub use task::{Task, TaskDraft, TaskField, TaskPatch};
pub use task_filter::StatusFilter;
