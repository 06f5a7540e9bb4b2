//! Error types shared by every lcc module.

/// Errors that can occur while building sequences or talking to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Color component {channel} must be between 0 and 255, got {value}")]
    InvalidColorComponent { channel: char, value: i64 },

    #[error("Unknown color name: {0}")]
    UnknownColorName(String),

    #[error("Expected a color as R,G,B (e.g. 255,128,0), got {0:?}")]
    InvalidRgb(String),

    #[error("Not connected to a terminal")]
    NotATerminal,

    #[error("Unsupported on this platform: {0}")]
    Unsupported(&'static str),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
