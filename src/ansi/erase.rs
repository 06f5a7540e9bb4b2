//! Erase sequences for the display and the current line.
//!
//! Handles CSI sequences:
//! - J: Erase in display (0 = to end, 1 = to start, 2 = all, 3 = all + scrollback)
//! - K: Erase in line (0 = to end, 1 = to start, 2 = all)

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Erase {
    FromCursorToDisplayEnd,
    FromDisplayStartToCursor,
    /// Whole display, scrollback kept.
    Display,
    /// Whole display plus scrollback.
    DisplayAndScrollback,
    FromCursorToLineEnd,
    FromLineStartToCursor,
    Line,
}

impl Erase {
    /// Pick the whole-display variant.
    pub const fn display(scrollback: bool) -> Self {
        if scrollback {
            Erase::DisplayAndScrollback
        } else {
            Erase::Display
        }
    }

    pub const fn sequence(self) -> &'static str {
        match self {
            Erase::FromCursorToDisplayEnd => "\x1b[J",
            Erase::FromDisplayStartToCursor => "\x1b[1J",
            Erase::Display => "\x1b[2J",
            Erase::DisplayAndScrollback => "\x1b[3J",
            Erase::FromCursorToLineEnd => "\x1b[K",
            Erase::FromLineStartToCursor => "\x1b[1K",
            Erase::Line => "\x1b[2K",
        }
    }

    pub fn write_to<W: Write>(self, out: &mut W) -> io::Result<()> {
        out.write_all(self.sequence().as_bytes())
    }
}

impl fmt::Display for Erase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sequence())
    }
}
