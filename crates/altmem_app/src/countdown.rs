use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

pub const COUNTDOWN_SECONDS: u64 = 15;

/// Keep a console window opened by double-click readable before it closes.
/// Does nothing when stdin is not a terminal.
pub fn countdown_before_exit(seconds: u64) {
    if !io::stdin().is_terminal() {
        return;
    }
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "\nConsole will close automatically in {seconds} seconds...");
    let _ = writeln!(err, "(Press Ctrl+C to exit immediately)");
    for remaining in (1..=seconds).rev() {
        let _ = write!(err, "  Closing in {remaining:2}...\r");
        let _ = err.flush();
        thread::sleep(Duration::from_secs(1));
    }
    let _ = write!(err, "{:40}\r", "");
    let _ = err.flush();
}
