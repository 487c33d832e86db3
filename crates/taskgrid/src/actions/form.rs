//! Add-task form actions

/// Actions for the add-task popup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Open the form as an overlay view
    Open,
    /// One typed character into the focused field
    Char(char),
    /// Backspace in the focused field
    Backspace,
    /// Move focus to the next field
    NextField,
    /// Move focus to the previous field
    PrevField,
    /// Cycle the status choice (only meaningful while the status field is focused)
    CycleStatus,
    /// Validate and submit; blocked with a message when a text field is blank
    Submit,
    /// Close the form without adding
    Cancel,
}
