//! Text attributes and the SGR attribute codes behind them.

use std::fmt;

/// Raw SGR attribute codes.
///
/// Only a subset is reachable through [`TextAttributes`]; the rest are
/// exposed for callers composing their own sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    HalfBright,
    Italic,
    Underline,
    Blink,
    Reverse,
    PrimaryFont,
    FirstAlternateFont,
    SecondAlternateFont,
    DoubleUnderline,
    ResetIntensity,
    ItalicOff,
    UnderlineOff,
    BlinkOff,
    ReverseOff,
}

impl SgrCode {
    pub const fn code(self) -> u8 {
        match self {
            SgrCode::Reset => 0,
            SgrCode::Bold => 1,
            SgrCode::HalfBright => 2,
            SgrCode::Italic => 3,
            SgrCode::Underline => 4,
            SgrCode::Blink => 5,
            SgrCode::Reverse => 7,
            SgrCode::PrimaryFont => 10,
            SgrCode::FirstAlternateFont => 11,
            SgrCode::SecondAlternateFont => 12,
            SgrCode::DoubleUnderline => 21,
            SgrCode::ResetIntensity => 22,
            SgrCode::ItalicOff => 23,
            SgrCode::UnderlineOff => 24,
            SgrCode::BlinkOff => 25,
            SgrCode::ReverseOff => 27,
        }
    }

    /// Standalone sequence for this code, e.g. `ESC[7m`.
    pub fn sequence(self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

impl fmt::Display for SgrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Brightness {
    /// Half-bright (SGR 2)
    Light,
    #[default]
    Normal,
    /// SGR 1
    Bold,
}

impl Brightness {
    pub const fn sgr_code(self) -> Option<SgrCode> {
        match self {
            Brightness::Light => Some(SgrCode::HalfBright),
            Brightness::Normal => None,
            Brightness::Bold => Some(SgrCode::Bold),
        }
    }
}

/// Underline style. Only one can be active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Underline {
    #[default]
    None,
    Simple,
    Double,
}

impl Underline {
    pub const fn sgr_code(self) -> Option<SgrCode> {
        match self {
            Underline::None => None,
            Underline::Simple => Some(SgrCode::Underline),
            Underline::Double => Some(SgrCode::DoubleUnderline),
        }
    }
}

/// Independent style axes applied on top of the colors.
///
/// Every combination is legal; nothing here is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextAttributes {
    pub italic: bool,
    pub underline: Underline,
    pub blink: bool,
    pub bright: Brightness,
}

impl TextAttributes {
    pub const DEFAULT: TextAttributes = TextAttributes {
        italic: false,
        underline: Underline::None,
        blink: false,
        bright: Brightness::Normal,
    };

    /// The SGR codes these attributes add, in emission order:
    /// italic, underline, blink, then brightness.
    pub fn sgr_codes(&self) -> Vec<SgrCode> {
        let mut codes = Vec::with_capacity(4);
        if self.italic {
            codes.push(SgrCode::Italic);
        }
        codes.extend(self.underline.sgr_code());
        if self.blink {
            codes.push(SgrCode::Blink);
        }
        codes.extend(self.bright.sgr_code());
        codes
    }
}
