//! Ctrl+C handling while a wrapped command runs.
//!
//! The terminal delivers SIGINT to the whole foreground process group, so the
//! child sees it directly. tn only records that it happened and keeps going,
//! so it can still report how the child ended. Once the child is gone,
//! [`InterruptHandler::release`] makes the next Ctrl+C terminate tn, so a
//! stalled notification can be abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, TnError};

/// Exit code used when Ctrl+C ends tn itself (`128 + SIGINT`).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Records SIGINT instead of terminating.
///
/// `InterruptHandler` is cheap to clone; clones share the same flags.
#[derive(Clone, Default)]
pub struct InterruptHandler {
    interrupted: Arc<AtomicBool>,
    released: Arc<AtomicBool>,
}

impl InterruptHandler {
    /// Register the process-wide handler.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler is already registered or the OS refuses
    /// the registration.
    pub fn install() -> Result<Self> {
        let handler = Self::default();
        let registered = handler.clone();

        ctrlc::set_handler(move || {
            if registered.on_interrupt() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        })
        .map_err(|e| TnError::SignalHandler(e.to_string()))?;

        Ok(handler)
    }

    /// Stop shielding tn from Ctrl+C. Called once the child has exited.
    pub fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
    }

    /// Record one SIGINT. Returns `true` when tn should exit.
    fn on_interrupt(&self) -> bool {
        self.interrupted.store(true, Ordering::SeqCst);
        self.released.load(Ordering::SeqCst)
    }

    /// Whether SIGINT arrived since the handler was installed.
    pub fn was_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detached(initial: bool) -> (InterruptHandler, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(initial));
        let handler = InterruptHandler {
            interrupted: Arc::clone(&flag),
            released: Arc::new(AtomicBool::new(false)),
        };
        (handler, flag)
    }

    #[test]
    fn test_not_interrupted_initially() {
        let (handler, _) = detached(false);
        assert!(!handler.was_interrupted());
    }

    #[test]
    fn test_flag_is_observed() {
        let (handler, flag) = detached(false);
        flag.store(true, Ordering::SeqCst);
        assert!(handler.was_interrupted());
    }

    #[test]
    fn test_clones_share_state() {
        let (handler, flag) = detached(false);
        let clone = handler.clone();
        flag.store(true, Ordering::SeqCst);
        assert!(handler.was_interrupted());
        assert!(clone.was_interrupted());
    }

    #[test]
    fn test_interrupt_while_child_runs_is_absorbed() {
        let (handler, _) = detached(false);
        assert!(!handler.on_interrupt());
        assert!(handler.was_interrupted());
    }

    #[test]
    fn test_interrupt_after_release_exits() {
        let (handler, _) = detached(false);
        handler.release();
        assert!(handler.on_interrupt());
    }

    #[test]
    fn test_release_is_shared_with_registered_clone() {
        let (handler, _) = detached(false);
        let registered = handler.clone();
        handler.release();
        assert!(registered.on_interrupt());
    }
}
