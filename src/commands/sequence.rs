//! Handlers that only emit escape sequences.

use std::io::Write;

use anyhow::Result;

use lcc::{CursorMove, Erase};

use crate::cli::{CursorCommand, EraseCommand, FormatArgs};

/// Write the formatted text. No trailing newline.
pub fn handle_format(args: &FormatArgs, out: &mut impl Write) -> Result<()> {
    lcc::write_formatted(out, &args.text, &args.style())?;
    out.flush()?;
    Ok(())
}

pub fn handle_cursor(cmd: &CursorCommand, out: &mut impl Write) -> Result<()> {
    CursorMove::from(cmd).write_to(out)?;
    out.flush()?;
    Ok(())
}

pub fn handle_erase(cmd: &EraseCommand, out: &mut impl Write) -> Result<()> {
    Erase::from(cmd).write_to(out)?;
    out.flush()?;
    Ok(())
}
