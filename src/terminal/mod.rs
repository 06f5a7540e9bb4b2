//! Stateful terminal operations.
//!
//! Provides:
//! - Line discipline save/cbreak/restore
//! - Cursor location query (Device Status Report)
//! - Terminal size detection
//!
//! Raw mode relies on POSIX termios. On other platforms the location query
//! reports [`crate::Error::Unsupported`].

mod location;
mod raw_mode;
mod size;

pub use location::{
    current_location, parse_location_reply, query_location, Coordinate, DEVICE_STATUS_REPORT,
};
#[cfg(unix)]
pub use raw_mode::Termios;
pub use raw_mode::{CbreakGuard, LineDiscipline};
pub use size::{terminal_size, TerminalSize};
