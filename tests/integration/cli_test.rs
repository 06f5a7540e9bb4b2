//! End-to-end tests for the `lcc` binary.

use predicates::prelude::*;

use super::helpers::lcc;

#[test]
fn format_defaults_to_white_on_black() {
    lcc()
        .args(["format", "X"])
        .assert()
        .success()
        .stdout("\x1b[37;40mX\x1b[0;m");
}

#[test]
fn format_combines_all_flags_in_order() {
    lcc()
        .args([
            "format",
            "hi",
            "--fg",
            "cyan",
            "--bright-fg",
            "--bg",
            "yellow",
            "--italic",
            "--underline",
            "simple",
            "--blink",
            "--bright",
            "light",
        ])
        .assert()
        .success()
        .stdout("\x1b[96;43;3;4;5;2mhi\x1b[0;m");
}

#[test]
fn format_true_colors() {
    lcc()
        .args(["format", "x", "--fg-rgb", "10,20,30", "--bg-rgb", "1,2,3"])
        .assert()
        .success()
        .stdout("\x1b[38;2;10;20;30;48;2;1;2;3mx\x1b[0;m");
}

#[test]
fn format_rejects_out_of_range_component() {
    lcc()
        .args(["format", "x", "--fg-rgb", "10,300,30"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must be between 0 and 255"));
}

#[test]
fn format_rejects_unknown_color() {
    lcc()
        .args(["format", "x", "--bg", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color name"));
}

#[test]
fn cursor_commands() {
    let cases: [(&[&str], &str); 6] = [
        (&["cursor", "up"], "\x1b[1A"),
        (&["cursor", "down", "2"], "\x1b[2E"),
        (&["cursor", "column", "7"], "\x1b[7G"),
        (&["cursor", "to", "5", "10"], "\x1b[10;5H"),
        (&["cursor", "save"], "\x1b[s"),
        (&["cursor", "load"], "\x1b[u"),
    ];

    for (args, expected) in cases {
        lcc().args(args).assert().success().stdout(expected);
    }
}

#[test]
fn erase_commands() {
    let cases: [(&[&str], &str); 4] = [
        (&["erase", "to-display-end"], "\x1b[J"),
        (&["erase", "display"], "\x1b[2J"),
        (&["erase", "display", "--scrollback"], "\x1b[3J"),
        (&["erase", "line"], "\x1b[2K"),
    ];

    for (args, expected) in cases {
        lcc().args(args).assert().success().stdout(expected);
    }
}

#[test]
fn location_without_terminal_fails_cleanly() {
    lcc()
        .arg("location")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Not connected to a terminal"));
}

#[test]
fn size_without_terminal_fails_cleanly() {
    lcc()
        .arg("size")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read the terminal size"));
}
