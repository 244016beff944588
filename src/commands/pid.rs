//! Pid command handler.
//!
//! Watches an already-running process and notifies when it exits.

use std::time::Duration;

use crate::config::{merge_tags, Config, Overrides};
use crate::duration::format_duration;
use crate::error::{Result, TnError};
use crate::notifier::Message;
use crate::output::print_watching;
use crate::process::ProcessWaiter;

use super::deliver;

const TITLE: &str = "🏁 Process Exited";
const TAG: &str = "checkered_flag";

/// Parse a PID argument. Zero, negative and non-numeric values are rejected.
pub fn parse_pid(arg: &str) -> Result<u32> {
    arg.trim()
        .parse::<u32>()
        .ok()
        .filter(|pid| *pid > 0)
        .ok_or_else(|| TnError::InvalidPid(arg.to_string()))
}

/// Build the "process exited" message.
pub fn pid_message(config: &Config, overrides: &Overrides, pid: u32, elapsed: Duration) -> Message {
    Message::from_config(config)
        .with_title(TITLE)
        .with_body(format!(
            "PID {} exited after {}",
            pid,
            format_duration(elapsed)
        ))
        .with_tags(merge_tags(TAG, overrides.user_tags()))
}

/// Watch `pid_arg` until it exits, then notify.
///
/// # Returns
///
/// * `Ok(())` once the notification was delivered
/// * `Err(TnError::InvalidPid)` for a malformed PID
/// * `Err(TnError::ProcessNotFound)` if the process cannot be observed
/// * `Err(TnError::Notify)` if the notification was not delivered
pub fn pid_command(
    config: &Config,
    overrides: &Overrides,
    pid_arg: &str,
    waiter: &dyn ProcessWaiter,
) -> Result<()> {
    let pid = parse_pid(pid_arg)?;

    print_watching(pid);
    let elapsed = waiter.wait_for_exit(pid)?;
    log::debug!("pid {} exited after {:?}", pid, elapsed);

    let msg = pid_message(config, overrides, pid, elapsed);
    deliver(&msg)?;
    Ok(())
}
