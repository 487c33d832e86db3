//! Actions module
//!
//! All state transitions are expressed as actions flowing through the
//! store. The root enum is tagged by domain; raw key events enter as
//! `Action::Key` and are translated by the keyboard middleware into the
//! view-specific variants below.

pub mod form;
pub mod global;
pub mod seed;
pub mod task;

pub use form::FormAction;
pub use global::GlobalAction;
pub use seed::SeedAction;
pub use task::TaskAction;

use ratatui::crossterm::event::KeyEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw keyboard input, consumed by the keyboard middleware
    Key(KeyEvent),
    /// Application-wide actions (quit, close view)
    Global(GlobalAction),
    /// Startup seed fetch lifecycle
    Seed(SeedAction),
    /// Task table actions (mutations, navigation, search, filter, editing)
    Task(TaskAction),
    /// Add-task form actions
    Form(FormAction),
}
