//! SGR (Select Graphic Rendition) sequence builder.
//!
//! Composes a [`Style`] into a single `ESC[...m` sequence around the text,
//! followed by a reset.

use std::io::{self, Write};

use crate::style::Style;

/// Trailing reset emitted after every formatted payload.
pub const RESET: &str = "\x1b[0;m";

/// Format `text` with the given style.
///
/// Parameters are emitted in a fixed order: foreground, background, italic,
/// underline, blink, brightness. The text is inserted verbatim.
///
/// # Example
/// ```
/// use lcc::{format, Style};
///
/// assert_eq!(format("X", &Style::default()), "\x1b[37;40mX\x1b[0;m");
/// ```
pub fn format(text: &str, style: &Style) -> String {
    let mut buf = String::with_capacity(text.len() + 32);
    push_style_params(style, &mut buf);
    buf.push('m');
    buf.push_str(text);
    buf.push_str(RESET);
    buf
}

/// Append the opening `ESC[` and every parameter of `style`, without the
/// closing `m`.
fn push_style_params(style: &Style, buf: &mut String) {
    buf.push_str("\x1b[");
    buf.push_str(&style.foreground.sgr_params());
    buf.push(';');
    buf.push_str(&style.background.sgr_params());
    for code in style.attributes.sgr_codes() {
        buf.push(';');
        buf.push_str(&code.to_string());
    }
}

/// Format `text` and write it to `out`.
pub fn write_formatted<W: Write>(out: &mut W, text: &str, style: &Style) -> io::Result<()> {
    out.write_all(format(text, style).as_bytes())
}
