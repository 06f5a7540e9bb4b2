//! Cursor movement sequences.
//!
//! Handles CSI sequences:
//! - A: Cursor up
//! - E: Cursor next line (down, to column 1)
//! - C: Cursor forward
//! - D: Cursor back
//! - G: Cursor horizontal absolute
//! - d: Cursor vertical absolute
//! - H: Cursor position
//! - s/u: Save/restore cursor
//!
//! Coordinates are 1-based and always passed column first.

use std::fmt;
use std::io::{self, Write};

/// Default step for relative moves.
pub const DEFAULT_STEP: u16 = 1;

/// A single cursor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorMove {
    Up(u16),
    /// Moves to the start of the line `n` rows down.
    Down(u16),
    Left(u16),
    Right(u16),
    ToColumn(u16),
    ToRow(u16),
    ToCoordinate { column: u16, row: u16 },
    SaveLocation,
    LoadLocation,
}

impl CursorMove {
    /// Write this command to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for CursorMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorMove::Up(n) => write!(f, "\x1b[{n}A"),
            CursorMove::Down(n) => write!(f, "\x1b[{n}E"),
            CursorMove::Left(n) => write!(f, "\x1b[{n}D"),
            CursorMove::Right(n) => write!(f, "\x1b[{n}C"),
            CursorMove::ToColumn(x) => write!(f, "\x1b[{x}G"),
            CursorMove::ToRow(y) => write!(f, "\x1b[{y}d"),
            // Wire order is row;column.
            CursorMove::ToCoordinate { column, row } => write!(f, "\x1b[{row};{column}H"),
            CursorMove::SaveLocation => f.write_str("\x1b[s"),
            CursorMove::LoadLocation => f.write_str("\x1b[u"),
        }
    }
}

pub fn up(n: u16) -> String {
    CursorMove::Up(n).to_string()
}

pub fn down(n: u16) -> String {
    CursorMove::Down(n).to_string()
}

pub fn left(n: u16) -> String {
    CursorMove::Left(n).to_string()
}

pub fn right(n: u16) -> String {
    CursorMove::Right(n).to_string()
}

pub fn to_column(x: u16) -> String {
    CursorMove::ToColumn(x).to_string()
}

pub fn to_row(y: u16) -> String {
    CursorMove::ToRow(y).to_string()
}

/// Absolute move. Arguments are `(column, row)`; the sequence is `ESC[row;colH`.
pub fn to_coordinate(column: u16, row: u16) -> String {
    CursorMove::ToCoordinate { column, row }.to_string()
}

pub fn save_location() -> String {
    CursorMove::SaveLocation.to_string()
}

pub fn load_location() -> String {
    CursorMove::LoadLocation.to_string()
}
