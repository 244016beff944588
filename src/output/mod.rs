//! Terminal output formatting for tn.
//!
//! Status lines go to stderr so that stdout stays owned by the wrapped
//! command. Only the `tn config` listing is printed to stdout.
//! Functions are organized by domain:
//!
//! - [`messages`] - Error, warning, info and progress lines
//! - [`settings`] - Configuration display and token masking

pub mod messages;
pub mod settings;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

pub use messages::{
    print_config_saved, print_error, print_info, print_notification_failed,
    print_notification_sent, print_running, print_warning, print_watching,
};
pub use settings::{display_value, mask_token, print_settings, NOT_SET};
