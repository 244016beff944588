//! CLI command handlers for tn.
//!
//! Each handler receives the resolved [`Config`](crate::config::Config)
//! explicitly; nothing reads process-wide settings.
//!
//! # Commands
//!
//! - [`run`] - Run a command and notify with its result
//! - [`pid`] - Watch an existing process and notify when it exits
//! - [`notify`] - Send an ad-hoc notification
//! - [`config`] - View or persist settings

mod config;
mod notify;
mod pid;
mod run;

pub use config::{config_command, config_command_at, ConfigUpdate};
pub use notify::{notify_command, notify_message};
pub use pid::{parse_pid, pid_command, pid_message};
pub use run::{build_command, completion_message, exit_code_of, run_command};

use crate::notifier::{self, Message, NotifyError};
use crate::output::print_notification_sent;

/// Send a message and report where it went.
fn deliver(msg: &Message) -> std::result::Result<(), NotifyError> {
    notifier::send(msg)?;
    print_notification_sent(&msg.endpoint());
    Ok(())
}
