//! Termination signals as a pollable flag.
//!
//! Raw mode turns Ctrl-C into a key event, but SIGTERM, SIGHUP and friends
//! still arrive as signals. Handlers only set an atomic flag; the main thread
//! polls it alongside the keyboard and stops the game loop, so the terminal
//! is restored on the normal exit path.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Install handlers for the termination signals.
    ///
    /// A second signal while shutdown is already pending exits immediately
    /// with status 1.
    pub fn register() -> io::Result<Self> {
        let requested = Arc::new(AtomicBool::new(false));
        let mut signals = TERM_SIGNALS.to_vec();
        #[cfg(unix)]
        signals.push(signal_hook::consts::SIGHUP);

        for sig in signals {
            // Registered first, so it only fires once the flag is already set.
            flag::register_conditional_shutdown(sig, 1, Arc::clone(&requested))?;
            flag::register(sig, Arc::clone(&requested))?;
        }
        Ok(Self { requested })
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}
