//! Application-wide actions

/// Actions that affect the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
    /// Close the top-most view (quits when only the base view remains)
    Close,
}
