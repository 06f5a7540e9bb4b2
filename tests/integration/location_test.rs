//! Cursor location query against a pseudo-terminal.

use std::io::{Read, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use portable_pty::{native_pty_system, ChildKiller, CommandBuilder, PtySize};

const REPLY_TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn location_answers_with_stdout_redirected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_path = temp_dir.path().join("location.txt");
    let bin = assert_cmd::cargo::cargo_bin("lcc");

    let pair = native_pty_system()
        .openpty(PtySize {
            rows: 24,
            cols: 80,
            pixel_width: 0,
            pixel_height: 0,
        })
        .unwrap();

    // stdin stays on the terminal, stdout goes to a file
    let mut cmd = CommandBuilder::new("sh");
    cmd.arg("-c");
    cmd.arg(format!(
        "'{}' location > '{}'",
        bin.display(),
        out_path.display()
    ));
    let mut child = pair.slave.spawn_command(cmd).unwrap();
    drop(pair.slave);

    let mut reader = pair.master.try_clone_reader().unwrap();
    let mut writer = pair.master.take_writer().unwrap();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0u8; 64];
        while let Ok(n) = reader.read(&mut buf) {
            if n == 0 || tx.send(buf[..n].to_vec()).is_err() {
                break;
            }
        }
    });

    // Wait for the request to reach the terminal side
    let deadline = Instant::now() + REPLY_TIMEOUT;
    let mut seen = Vec::new();
    while !seen.windows(4).any(|w| w == b"\x1b[6n") {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(chunk) => seen.extend_from_slice(&chunk),
            Err(_) => {
                let _ = child.kill();
                panic!("Terminal never saw the request, got {:?}", seen);
            }
        }
    }

    writer.write_all(b"\x1b[5;7R").unwrap();
    writer.flush().unwrap();

    let status = child.wait().unwrap();
    assert!(status.success(), "lcc location failed: {:?}", status);
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "7 5\n");
}
