//! Terminal size query.

use terminal_size::{Height, Width};

use crate::error::{Error, Result};

/// Dimensions of the controlling terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl From<(Width, Height)> for TerminalSize {
    fn from((Width(columns), Height(rows)): (Width, Height)) -> Self {
        Self { columns, rows }
    }
}

/// Current size of the terminal attached to stdout, stderr or stdin.
///
/// Read fresh on every call.
///
/// # Errors
/// [`Error::NotATerminal`] when none of the standard streams is a terminal.
pub fn terminal_size() -> Result<TerminalSize> {
    ::terminal_size::terminal_size()
        .map(TerminalSize::from)
        .ok_or(Error::NotATerminal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_width_and_height() {
        let size = TerminalSize::from((Width(80), Height(24)));
        assert_eq!(
            size,
            TerminalSize {
                columns: 80,
                rows: 24
            }
        );
    }
}
