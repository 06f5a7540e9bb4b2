//! Command-line definitions for the `lcc` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use lcc::ansi::cursor::DEFAULT_STEP;
use lcc::{Background, Brightness, CursorMove, Erase, Foreground, Palette, Rgb, Style, Underline};

const LONG_ABOUT: &str = r#"lcc prints ANSI escape sequences for cursor movement, erasing and text styling.

Sequences are written to stdout without a trailing newline, so they can be
embedded in shell scripts.

EXAMPLES:
    # Bold red text on the default black background
    lcc format --fg red --bright bold "error"

    # True color foreground
    lcc format --fg-rgb 255,128,0 "orange"

    # Move to column 5, row 10 and clear the line
    lcc cursor to 5 10; lcc erase line

    # Where is the cursor?
    lcc location"#;

#[derive(Debug, Parser)]
#[command(name = "lcc")]
#[command(version)]
#[command(about = "Build ANSI escape sequences for terminal rendering")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output to stderr (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print text wrapped in an SGR sequence followed by a reset
    Format(FormatArgs),

    /// Move the cursor
    #[command(subcommand)]
    Cursor(CursorCommand),

    /// Erase part of the display or the current line
    #[command(subcommand)]
    Erase(EraseCommand),

    /// Print the cursor location as "COLUMN ROW"
    Location,

    /// Print the terminal size as "COLUMNS ROWS"
    Size,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Text to format (inserted verbatim)
    pub text: String,

    /// Foreground palette color
    #[arg(long, value_parser = parse_palette, conflicts_with = "fg_rgb")]
    pub fg: Option<Palette>,

    /// Use the bright variant of --fg
    #[arg(long, requires = "fg")]
    pub bright_fg: bool,

    /// Foreground true color as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    pub fg_rgb: Option<Rgb>,

    /// Background palette color
    #[arg(long, value_parser = parse_palette, conflicts_with = "bg_rgb")]
    pub bg: Option<Palette>,

    /// Background true color as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    pub bg_rgb: Option<Rgb>,

    #[arg(long)]
    pub italic: bool,

    #[arg(long, value_enum, default_value_t = UnderlineArg::None)]
    pub underline: UnderlineArg,

    #[arg(long)]
    pub blink: bool,

    /// Text intensity
    #[arg(long, value_enum, default_value_t = BrightArg::Normal)]
    pub bright: BrightArg,
}

impl FormatArgs {
    /// Translate the flags into a style, falling back to white on black.
    pub fn style(&self) -> Style {
        let foreground = match (self.fg_rgb, self.fg) {
            (Some(rgb), _) => Foreground::TrueColor(rgb),
            (None, Some(color)) if self.bright_fg => Foreground::Bright(color),
            (None, Some(color)) => Foreground::Normal(color),
            (None, None) => Foreground::DEFAULT,
        };
        let background = match (self.bg_rgb, self.bg) {
            (Some(rgb), _) => Background::TrueColor(rgb),
            (None, Some(color)) => Background::Indexed(color),
            (None, None) => Background::DEFAULT,
        };

        let mut style = Style::new()
            .fg(foreground)
            .bg(background)
            .underline(self.underline.into())
            .bright(self.bright.into());
        style.attributes.italic = self.italic;
        style.attributes.blink = self.blink;
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnderlineArg {
    None,
    Simple,
    Double,
}

impl From<UnderlineArg> for Underline {
    fn from(arg: UnderlineArg) -> Self {
        match arg {
            UnderlineArg::None => Underline::None,
            UnderlineArg::Simple => Underline::Simple,
            UnderlineArg::Double => Underline::Double,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BrightArg {
    Light,
    Normal,
    Bold,
}

impl From<BrightArg> for Brightness {
    fn from(arg: BrightArg) -> Self {
        match arg {
            BrightArg::Light => Brightness::Light,
            BrightArg::Normal => Brightness::Normal,
            BrightArg::Bold => Brightness::Bold,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CursorCommand {
    /// Move up N rows
    Up {
        #[arg(default_value_t = DEFAULT_STEP)]
        n: u16,
    },
    /// Move to the start of the line N rows down
    Down {
        #[arg(default_value_t = DEFAULT_STEP)]
        n: u16,
    },
    /// Move left N columns
    Left {
        #[arg(default_value_t = DEFAULT_STEP)]
        n: u16,
    },
    /// Move right N columns
    Right {
        #[arg(default_value_t = DEFAULT_STEP)]
        n: u16,
    },
    /// Move to an absolute column (1-based)
    Column { x: u16 },
    /// Move to an absolute row (1-based)
    Row { y: u16 },
    /// Move to COLUMN ROW (1-based)
    To { column: u16, row: u16 },
    /// Save the cursor location
    Save,
    /// Restore the saved cursor location
    Load,
}

impl From<&CursorCommand> for CursorMove {
    fn from(cmd: &CursorCommand) -> Self {
        match *cmd {
            CursorCommand::Up { n } => CursorMove::Up(n),
            CursorCommand::Down { n } => CursorMove::Down(n),
            CursorCommand::Left { n } => CursorMove::Left(n),
            CursorCommand::Right { n } => CursorMove::Right(n),
            CursorCommand::Column { x } => CursorMove::ToColumn(x),
            CursorCommand::Row { y } => CursorMove::ToRow(y),
            CursorCommand::To { column, row } => CursorMove::ToCoordinate { column, row },
            CursorCommand::Save => CursorMove::SaveLocation,
            CursorCommand::Load => CursorMove::LoadLocation,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum EraseCommand {
    /// From the cursor to the end of the display
    ToDisplayEnd,
    /// From the start of the display to the cursor
    FromDisplayStart,
    /// The whole display
    Display {
        /// Also clear the scrollback buffer
        #[arg(long)]
        scrollback: bool,
    },
    /// From the cursor to the end of the line
    ToLineEnd,
    /// From the start of the line to the cursor
    FromLineStart,
    /// The whole line
    Line,
}

impl From<&EraseCommand> for Erase {
    fn from(cmd: &EraseCommand) -> Self {
        match *cmd {
            EraseCommand::ToDisplayEnd => Erase::FromCursorToDisplayEnd,
            EraseCommand::FromDisplayStart => Erase::FromDisplayStartToCursor,
            EraseCommand::Display { scrollback } => Erase::display(scrollback),
            EraseCommand::ToLineEnd => Erase::FromCursorToLineEnd,
            EraseCommand::FromLineStart => Erase::FromLineStartToCursor,
            EraseCommand::Line => Erase::Line,
        }
    }
}

fn parse_palette(s: &str) -> Result<Palette, lcc::Error> {
    s.parse()
}

fn parse_rgb(s: &str) -> Result<Rgb, lcc::Error> {
    s.parse()
}
