//! Application constants and default values.

use std::time::Duration;

/// Height of one card on the board, borders included.
pub const CARD_HEIGHT: u16 = 3;

/// Size of the ghost card that follows the finger during a touch drag.
pub const GHOST_WIDTH: u16 = 24;
pub const GHOST_HEIGHT: u16 = 3;

/// How long a toast notification stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Event poll timeout for the main loop, in milliseconds.
pub const EVENT_POLL_MS: u64 = 100;
