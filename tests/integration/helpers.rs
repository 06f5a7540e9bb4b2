//! Shared helpers for integration tests.

use assert_cmd::Command;

/// The `lcc` binary with stdin closed, so no terminal is attached.
pub fn lcc() -> Command {
    let mut cmd = Command::cargo_bin("lcc").expect("lcc binary should be built");
    cmd.write_stdin("");
    cmd
}
