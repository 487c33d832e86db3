//! View models - presentation logic separated from views
//!
//! Views stay dumb: they take a view model with all display text and cell
//! roles pre-computed and only map it onto widgets.

pub mod task_table_view_model;

pub use task_table_view_model::{CellRole, TaskRowViewModel, TaskTableViewModel};
