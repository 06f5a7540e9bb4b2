//! lcc - low-level terminal control.
//!
//! Builds ANSI escape sequences for cursor movement, erasing and text
//! styling, and queries the terminal for the cursor position and its size.
//!
//! Sequence builders are pure: they return strings and leave writing to
//! the caller. Operations that need the terminal itself live in
//! [`terminal`] and take their streams as parameters.
//!
//! ```
//! use lcc::{format, Background, Foreground, Palette, Style, Underline};
//!
//! let style = Style::new()
//!     .fg(Foreground::Bright(Palette::Green))
//!     .bg(Background::Indexed(Palette::Blue))
//!     .underline(Underline::Simple);
//! assert_eq!(format("ok", &style), "\x1b[92;44;4mok\x1b[0;m");
//! assert_eq!(lcc::cursor::to_coordinate(5, 10), "\x1b[10;5H");
//! ```

pub mod ansi;
pub mod error;
pub mod style;
pub mod terminal;

pub use ansi::{cursor, format, write_formatted, CursorMove, Erase};
pub use error::{Error, Result};
pub use style::{
    Background, Brightness, Foreground, Palette, Rgb, SgrCode, Style, TextAttributes, Underline,
};
pub use terminal::{current_location, query_location, terminal_size, Coordinate, TerminalSize};
