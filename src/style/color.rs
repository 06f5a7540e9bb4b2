//! Color selectors for SGR sequences.
//!
//! Indexed colors map to the classic 8-color palette:
//! - foreground: 30-37 (normal) and 90-97 (bright)
//! - background: 40-47
//!
//! True colors carry 24-bit RGB and render as `38;2;r;g;b` / `48;2;r;g;b`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The eight base colors of the ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Palette {
    /// Most terminals render `Brown` as yellow.
    pub const YELLOW: Palette = Palette::Brown;

    /// All palette entries in SGR order.
    pub const ALL: [Palette; 8] = [
        Palette::Black,
        Palette::Red,
        Palette::Green,
        Palette::Brown,
        Palette::Blue,
        Palette::Magenta,
        Palette::Cyan,
        Palette::White,
    ];

    /// Offset of this color within a block of eight SGR codes.
    pub const fn offset(self) -> u8 {
        match self {
            Palette::Black => 0,
            Palette::Red => 1,
            Palette::Green => 2,
            Palette::Brown => 3,
            Palette::Blue => 4,
            Palette::Magenta => 5,
            Palette::Cyan => 6,
            Palette::White => 7,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Palette::Black => "black",
            Palette::Red => "red",
            Palette::Green => "green",
            Palette::Brown => "brown",
            Palette::Blue => "blue",
            Palette::Magenta => "magenta",
            Palette::Cyan => "cyan",
            Palette::White => "white",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "yellow" {
            return Ok(Palette::YELLOW);
        }
        Palette::ALL
            .into_iter()
            .find(|color| color.name() == lower)
            .ok_or_else(|| Error::UnknownColorName(s.to_string()))
    }
}

/// A 24-bit "true color" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build a color from integer channels.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorComponent`] naming the first channel
    /// outside `0..=255`.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }
}

fn channel(name: char, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidColorComponent {
        channel: name,
        value,
    })
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `R,G,B`, e.g. `255,128,0`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(Error::InvalidRgb(s.to_string()));
        };
        let parse = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| Error::InvalidRgb(s.to_string()))
        };
        Rgb::new(parse(*r)?, parse(*g)?, parse(*b)?)
    }
}

/// Foreground color selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    /// SGR 30-37
    Normal(Palette),
    /// SGR 90-97
    Bright(Palette),
    /// SGR 38;2;r;g;b
    TrueColor(Rgb),
}

impl Foreground {
    pub const DEFAULT: Foreground = Foreground::Normal(Palette::White);

    /// Build a true color foreground, validating each channel.
    pub fn rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        Rgb::new(r, g, b).map(Foreground::TrueColor)
    }

    /// The SGR parameters selecting this color, without separators around them.
    pub fn sgr_params(&self) -> String {
        match self {
            Foreground::Normal(color) => (30 + color.offset()).to_string(),
            Foreground::Bright(color) => (90 + color.offset()).to_string(),
            Foreground::TrueColor(Rgb { r, g, b }) => format!("38;2;{r};{g};{b}"),
        }
    }
}

impl Default for Foreground {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Background color selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// SGR 40-47
    Indexed(Palette),
    /// SGR 48;2;r;g;b
    TrueColor(Rgb),
}

impl Background {
    pub const DEFAULT: Background = Background::Indexed(Palette::Black);

    /// Build a true color background, validating each channel.
    pub fn rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        Rgb::new(r, g, b).map(Background::TrueColor)
    }

    pub fn sgr_params(&self) -> String {
        match self {
            Background::Indexed(color) => (40 + color.offset()).to_string(),
            Background::TrueColor(Rgb { r, g, b }) => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::DEFAULT
    }
}
