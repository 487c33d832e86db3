//! Loading state for the one-shot seed fetch

/// Where the startup seed fetch currently stands.
///
/// The fetch happens exactly once; there is no retry path, so `Error` is
/// terminal. The table shows the message and stays empty but usable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}
