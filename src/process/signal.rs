use super::ProcessError;

use libc::{signal, sighandler_t, SIGINT};

pub extern "C" fn handle_sigint(_: i32) {
    // The foreground child owns the interrupt.
}

pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    unsafe {
        signal(SIGINT, handle_sigint as sighandler_t);
    }
    Ok(())
}
