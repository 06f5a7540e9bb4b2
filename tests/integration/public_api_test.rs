//! Tests against the public library surface.

use std::io::Cursor;

use lcc::terminal::{parse_location_reply, LineDiscipline};
use lcc::{
    cursor, format, query_location, Background, Brightness, Coordinate, Erase, Error, Foreground,
    Palette, Rgb, Style, Underline,
};

#[test]
fn sgr_sequences_are_byte_exact() {
    assert_eq!(format("X", &Style::default()), "\x1b[37;40mX\x1b[0;m");
    assert_eq!(
        format("X", &Style::new().bright(Brightness::Bold)),
        "\x1b[37;40;1mX\x1b[0;m"
    );
    assert_eq!(
        format("X", &Style::new().underline(Underline::Double)),
        "\x1b[37;40;21mX\x1b[0;m"
    );
    assert_eq!(
        format(
            "X",
            &Style::new()
                .fg(Foreground::Bright(Palette::White))
                .bg(Background::Indexed(Palette::Red))
        ),
        "\x1b[97;41mX\x1b[0;m"
    );
}

#[test]
fn true_color_construction_validates_channels() {
    assert!(Rgb::new(0, 128, 255).is_ok());
    assert!(matches!(
        Foreground::rgb(0, 0, -1),
        Err(Error::InvalidColorComponent { channel: 'b', value: -1 })
    ));
    assert!(matches!(
        Background::rgb(256, 0, 0),
        Err(Error::InvalidColorComponent { channel: 'r', value: 256 })
    ));
}

#[test]
fn cursor_and_erase_builders() {
    assert_eq!(cursor::up(cursor::DEFAULT_STEP), "\x1b[1A");
    assert_eq!(cursor::to_coordinate(5, 10), "\x1b[10;5H");
    assert_eq!(Erase::FromDisplayStartToCursor.sequence(), "\x1b[1J");
}

#[test]
fn location_reply_parsing() {
    assert_eq!(
        parse_location_reply(b"\x1b[24;80R"),
        Some(Coordinate { column: 80, row: 24 })
    );
    assert_eq!(parse_location_reply(b"\x1b[24-80R"), None);
}

/// Settings stored as a single word; cbreak clears the low bits.
struct WordDiscipline(std::cell::Cell<u64>);

impl LineDiscipline for WordDiscipline {
    type Settings = u64;

    fn get(&self) -> std::io::Result<u64> {
        Ok(self.0.get())
    }

    fn set(&self, settings: &u64) -> std::io::Result<()> {
        self.0.set(*settings);
        Ok(())
    }

    fn cbreak(settings: &u64) -> u64 {
        settings & !0xff
    }
}

#[test]
fn query_location_with_custom_discipline() {
    let discipline = WordDiscipline(std::cell::Cell::new(0xdead_beef));
    let mut input = Cursor::new(b"\x1b[2;40R".to_vec());
    let mut output = Vec::new();

    let location = query_location(&mut input, &mut output, &discipline).unwrap();

    assert_eq!(location, Some(Coordinate::new(40, 2)));
    assert_eq!(output, b"\x1b[6n");
    assert_eq!(discipline.0.get(), 0xdead_beef);
}
