//! Application constants
//!
//! The whole configuration surface of the application: there is no config
//! file, no CLI and no environment knobs beyond `RUST_LOG`.

use std::time::Duration;

/// How many seed records to consume at startup
pub const SEED_LIMIT: usize = 20;

/// Rows per table page
pub const PAGE_SIZE: usize = 10;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL_SECS: i64 = 3;

/// Poll interval of the main event loop
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);
