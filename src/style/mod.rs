//! Style model: colors plus text attributes.
//!
//! A [`Style`] is what the SGR builder consumes. It defaults to white text
//! on a black background with no attributes.

mod attributes;
mod color;

pub use attributes::{Brightness, SgrCode, TextAttributes, Underline};
pub use color::{Background, Foreground, Palette, Rgb};

/// Complete description of how a piece of text should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub foreground: Foreground,
    pub background: Background,
    pub attributes: TextAttributes,
}

impl Style {
    pub const DEFAULT: Style = Style {
        foreground: Foreground::DEFAULT,
        background: Background::DEFAULT,
        attributes: TextAttributes::DEFAULT,
    };

    pub fn new() -> Self {
        Self::DEFAULT
    }

    pub fn fg(mut self, foreground: Foreground) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn bg(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn italic(mut self) -> Self {
        self.attributes.italic = true;
        self
    }

    pub fn underline(mut self, underline: Underline) -> Self {
        self.attributes.underline = underline;
        self
    }

    pub fn blink(mut self) -> Self {
        self.attributes.blink = true;
        self
    }

    pub fn bright(mut self, bright: Brightness) -> Self {
        self.attributes.bright = bright;
        self
    }

    pub fn bold(self) -> Self {
        self.bright(Brightness::Bold)
    }

    /// Wrap `text` in this style. See [`crate::ansi::format`].
    pub fn paint(&self, text: &str) -> String {
        crate::ansi::format(text, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_each_axis() {
        let style = Style::new()
            .fg(Foreground::Bright(Palette::Red))
            .bg(Background::Indexed(Palette::Blue))
            .italic()
            .underline(Underline::Simple)
            .blink()
            .bold();

        assert_eq!(style.foreground, Foreground::Bright(Palette::Red));
        assert_eq!(style.background, Background::Indexed(Palette::Blue));
        assert!(style.attributes.italic);
        assert!(style.attributes.blink);
        assert_eq!(style.attributes.underline, Underline::Simple);
        assert_eq!(style.attributes.bright, Brightness::Bold);
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(Style::new(), Style::default());
    }
}
