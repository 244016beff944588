//! Run command handler.
//!
//! Runs a command through the platform shell, then reports its result.

use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use crate::config::{merge_tags, Config, Overrides};
use crate::duration::format_duration;
use crate::error::{Result, TnError};
use crate::notifier::Message;
use crate::output::{print_info, print_notification_failed, print_running};
use crate::signal::InterruptHandler;

use super::deliver;

const SUCCESS_TITLE: &str = "✅ Command Succeeded";
const SUCCESS_TAG: &str = "white_check_mark";
const FAILURE_TITLE: &str = "❌ Command Failed";
const FAILURE_TAG: &str = "x";

/// Build the shell invocation for `args`.
///
/// Unix joins the arguments and hands them to `sh -c`, so pipes and globs
/// work. Windows passes them to `cmd /C` so built-ins resolve.
pub fn build_command(args: &[String]) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").args(args);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(args.join(" "));
        cmd
    }
}

/// Exit code to report for a finished child.
///
/// A child killed by a signal on unix reports `128 + signal`, like a shell.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Build the result message for a finished command.
pub fn completion_message(
    config: &Config,
    overrides: &Overrides,
    display_cmd: &str,
    elapsed: Duration,
    exit_code: i32,
) -> Message {
    let duration = format_duration(elapsed);
    let (title, body, tag) = if exit_code == 0 {
        (
            SUCCESS_TITLE,
            format!("{}\nCompleted in {}", display_cmd, duration),
            SUCCESS_TAG,
        )
    } else {
        (
            FAILURE_TITLE,
            format!(
                "{}\nFailed in {} (exit code {})",
                display_cmd, duration, exit_code
            ),
            FAILURE_TAG,
        )
    };

    Message::from_config(config)
        .with_title(title)
        .with_body(body)
        .with_tags(merge_tags(tag, overrides.user_tags()))
}

/// Run a command, wait for it, and notify with the result.
///
/// The child inherits stdin, stdout and stderr. A failed notification is
/// reported but does not change the outcome. Ctrl+C is absorbed while the
/// child runs; once it has exited, Ctrl+C ends tn with exit code 130 even if
/// the notification is still in flight.
///
/// # Returns
///
/// * `Ok(code)` with the child's exit code
/// * `Err(TnError::NoCommand)` if `args` is empty
/// * `Err(TnError::Spawn)` if the command could not be started
pub fn run_command(config: &Config, overrides: &Overrides, args: &[String]) -> Result<i32> {
    if args.is_empty() {
        return Err(TnError::NoCommand);
    }

    let display_cmd = args.join(" ");
    print_running(&display_cmd);

    let interrupts = match InterruptHandler::install() {
        Ok(handler) => Some(handler),
        Err(e) => {
            log::debug!("Ctrl+C will not be intercepted: {}", e);
            None
        }
    };

    let start = Instant::now();
    let status = build_command(args)
        .status()
        .map_err(|e| TnError::Spawn(e.to_string()))?;
    let elapsed = start.elapsed();

    let exit_code = exit_code_of(status);
    log::debug!("command exited with {} after {:?}", exit_code, elapsed);

    if let Some(handler) = &interrupts {
        handler.release();
        if handler.was_interrupted() {
            print_info("interrupted, reporting result");
        }
    }

    let msg = completion_message(config, overrides, &display_cmd, elapsed, exit_code);
    if let Err(e) = deliver(&msg) {
        print_notification_failed(&e);
    }

    Ok(exit_code)
}
