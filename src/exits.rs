//! Exit handling: signal handlers and terminal restoration.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the interactive panel owns the alternate screen.
static ALT_SCREEN: AtomicBool = AtomicBool::new(false);

pub fn set_alt_screen(active: bool) {
    ALT_SCREEN.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; leaves the alternate screen and shows the cursor.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only emit escape codes on a TTY (not when piping passwords)
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
    const LEAVE_ALT: &[u8] = b"\x1b[?1049l";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
            if ALT_SCREEN.load(Ordering::SeqCst) {
                libc::write(1, LEAVE_ALT.as_ptr() as *const libc::c_void, LEAVE_ALT.len());
            }
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, register atexit cleanup and keep passwords out of core dumps.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}
