//! Handlers that ask the terminal for information.

use std::io::Write;

use anyhow::{bail, Context, Result};

use lcc::{Coordinate, TerminalSize};

/// Print the cursor location as `COLUMN ROW`.
///
/// The request goes to the controlling terminal, so stdout may be a pipe.
/// Refuses to run when stdin is not a terminal, since the command is meant
/// for interactive sessions and would otherwise wait on a terminal nobody
/// is looking at.
#[cfg(not(tarpaulin_include))]
pub fn handle_location(out: &mut impl Write) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(lcc::Error::NotATerminal).context("Cannot query the cursor location");
    }

    match lcc::current_location()? {
        Some(location) => write_location(location, out),
        None => bail!("Terminal did not report a cursor position"),
    }
}

/// Print the terminal size as `COLUMNS ROWS`.
#[cfg(not(tarpaulin_include))]
pub fn handle_size(out: &mut impl Write) -> Result<()> {
    let size = lcc::terminal_size().context("Cannot read the terminal size")?;
    write_size(size, out)
}

fn write_location(location: Coordinate, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {}", location.column, location.row)?;
    Ok(())
}

fn write_size(size: TerminalSize, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {}", size.columns, size.rows)?;
    Ok(())
}
