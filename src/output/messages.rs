//! Basic message output functions.
//!
//! Provides status, error, warning, and info message display on stderr.

use std::path::Path;

use super::colors::*;

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}Warning:{RESET} {}", msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{CYAN}tn:{RESET} {}", msg);
}

/// Announce the command about to be run.
pub fn print_running(display_cmd: &str) {
    eprintln!("{CYAN}tn:{RESET} running {BOLD}{:?}{RESET}", display_cmd);
}

/// Announce that a PID is being watched.
pub fn print_watching(pid: u32) {
    eprintln!("{CYAN}tn:{RESET} watching PID {BOLD}{}{RESET}…", pid);
}

/// Report a delivered notification and where it went.
pub fn print_notification_sent(endpoint: &str) {
    eprintln!("{CYAN}tn:{RESET} {GREEN}notification sent{RESET} → {}", endpoint);
}

/// Report a notification that could not be delivered.
pub fn print_notification_failed(err: &dyn std::fmt::Display) {
    eprintln!("{CYAN}tn:{RESET} {RED}notification failed:{RESET} {}", err);
}

/// Report where the config file was written.
pub fn print_config_saved(path: &Path) {
    eprintln!("{GREEN}Config saved to{RESET} {}", path.display());
}
