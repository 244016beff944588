//! Waiting for a process to exit.
//!
//! One capability, [`ProcessWaiter`], with a strategy picked per platform at
//! build time:
//!
//! - unix: [`PollWaiter`] probes the PID with a null signal on an interval.
//! - windows: [`HandleWaiter`] blocks on a process handle until the OS
//!   reports termination.

use std::time::Duration;

use crate::error::Result;

#[cfg(unix)]
mod poll;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use poll::{PollWaiter, POLL_INTERVAL};
#[cfg(windows)]
pub use windows::HandleWaiter;

/// Blocks until a process is gone.
pub trait ProcessWaiter {
    /// Wait until `pid` no longer exists and return how long that took.
    ///
    /// A PID that is already gone returns almost immediately. Fails right
    /// away with [`crate::error::TnError::ProcessNotFound`] when the OS will
    /// not let the caller observe the process.
    fn wait_for_exit(&self, pid: u32) -> Result<Duration>;
}

/// The waiter for the current platform.
#[cfg(unix)]
pub fn platform_waiter() -> PollWaiter {
    PollWaiter::default()
}

/// The waiter for the current platform.
#[cfg(windows)]
pub fn platform_waiter() -> HandleWaiter {
    HandleWaiter
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_platform_waiter_polls_at_default_interval() {
        assert_eq!(platform_waiter().interval(), POLL_INTERVAL);
    }

    #[test]
    fn test_platform_waiter_through_trait_object() {
        let mut child = Command::new("true").spawn().unwrap();
        let pid = child.id();
        child.wait().unwrap();

        let waiter: &dyn ProcessWaiter = &platform_waiter();
        let elapsed = waiter.wait_for_exit(pid).unwrap();
        assert!(elapsed < Duration::from_secs(1));
    }
}
