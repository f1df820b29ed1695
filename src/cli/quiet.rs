//! Process-wide output mode for CLI messages.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings, confirmations and prompts.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_tty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Prompts need someone at the keyboard and a caller that wants them.
pub fn skip_prompt() -> bool {
    enabled() || !is_tty(0)
}

/// Color escapes only when stderr is a terminal.
pub fn stderr_colors() -> bool {
    is_tty(2)
}
