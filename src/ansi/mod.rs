//! ANSI escape sequence builders.
//!
//! Every builder is pure and returns the sequence. Writing is left to the
//! caller, either directly or through the `write_*` / `write_to` helpers
//! which accept any [`std::io::Write`].

pub mod cursor;
mod erase;
mod sgr;

pub use cursor::CursorMove;
pub use erase::Erase;
pub use sgr::{format, write_formatted, RESET};
