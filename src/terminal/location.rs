//! Cursor location query via Device Status Report.
//!
//! Sends `ESC[6n` and reads the terminal's `ESC[<row>;<col>R` reply with the
//! input in cbreak mode. Request and reply travel over the same terminal, so
//! redirected stdin/stdout don't swallow either of them.

use std::io::{self, Read, Write};

use tracing::debug;

use super::raw_mode::{CbreakGuard, LineDiscipline};
use crate::error::Result;

/// Device Status Report request for the cursor position.
pub const DEVICE_STATUS_REPORT: &[u8] = b"\x1b[6n";

/// A 1-based terminal position, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub column: u16,
    pub row: u16,
}

impl Coordinate {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

impl From<Coordinate> for (u16, u16) {
    fn from(coord: Coordinate) -> Self {
        (coord.column, coord.row)
    }
}

/// Ask the terminal where the cursor is.
///
/// The terminal settings behind `discipline` are restored before this
/// returns, whether or not the exchange succeeded. Blocks until the reply
/// terminator `R` arrives or `input` ends.
///
/// Returns `Ok(None)` when the reply doesn't look like a position report.
///
/// # Errors
/// Any I/O failure while switching modes, writing the request, reading the
/// reply or restoring the settings.
pub fn query_location<R, W, D>(
    input: &mut R,
    output: &mut W,
    discipline: &D,
) -> Result<Option<Coordinate>>
where
    R: Read,
    W: Write,
    D: LineDiscipline,
{
    let guard = CbreakGuard::enter(discipline)?;
    output.write_all(DEVICE_STATUS_REPORT)?;
    output.flush()?;
    let reply = read_reply(input)?;
    guard.restore()?;

    debug!(reply = ?String::from_utf8_lossy(&reply), "Cursor position reply");
    Ok(parse_location_reply(&reply))
}

/// Read bytes one at a time up to and including `R`, or until end of input.
fn read_reply<R: Read>(input: &mut R) -> io::Result<Vec<u8>> {
    let mut reply = Vec::with_capacity(16);
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                reply.push(byte[0]);
                if byte[0] == b'R' {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(reply)
}

/// Parse a `ESC[<row>;<col>R` reply anchored at the start of `reply`.
///
/// Both numbers must be present and fit in a `u16`.
pub fn parse_location_reply(reply: &[u8]) -> Option<Coordinate> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let end = body.iter().position(|&b| b == b'R')?;
    let mut parts = body[..end].splitn(2, |&b| b == b';');
    let row = parse_number(parts.next()?)?;
    let column = parse_number(parts.next()?)?;
    Some(Coordinate { column, row })
}

fn parse_number(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Query the cursor location on the controlling terminal (`/dev/tty`).
///
/// # Errors
/// [`Error::NotATerminal`](crate::Error::NotATerminal) when the process has
/// no controlling terminal, plus anything [`query_location`] reports.
#[cfg(unix)]
pub fn current_location() -> Result<Option<Coordinate>> {
    use std::os::unix::io::AsRawFd;

    let tty = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map_err(|e| {
            debug!("Cannot open /dev/tty: {}", e);
            crate::error::Error::NotATerminal
        })?;
    let discipline = super::raw_mode::Termios::new(tty.as_raw_fd());
    let mut input = &tty;
    let mut output = &tty;
    query_location(&mut input, &mut output, &discipline)
}

#[cfg(not(unix))]
pub fn current_location() -> Result<Option<Coordinate>> {
    Err(crate::error::Error::Unsupported(
        "cursor location query requires POSIX termios",
    ))
}
