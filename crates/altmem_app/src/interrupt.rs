use std::process;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

static COUNTING_DOWN: AtomicBool = AtomicBool::new(false);
static PENDING_EXIT: AtomicU8 = AtomicU8::new(EXIT_FAILURE);

/// Install the Ctrl+C handler. Outputs already renamed into place stay on disk.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let (message, code) = on_interrupt(
            COUNTING_DOWN.load(Ordering::SeqCst),
            PENDING_EXIT.load(Ordering::SeqCst),
        );
        eprintln!("{message}");
        process::exit(code.into());
    })
}

/// The run is finished with `code`; an interrupt from now on only skips the wait.
pub fn enter_countdown(code: u8) {
    PENDING_EXIT.store(code, Ordering::SeqCst);
    COUNTING_DOWN.store(true, Ordering::SeqCst);
}

fn on_interrupt(counting_down: bool, pending_exit: u8) -> (&'static str, u8) {
    if counting_down {
        ("\nExiting...", pending_exit)
    } else {
        ("\n\nInterrupted by user", EXIT_FAILURE)
    }
}
