pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod duration;
pub mod error;
pub mod notifier;
pub mod output;
pub mod process;
pub mod signal;

pub use config::{Config, Overrides};
pub use error::{Result, TnError};
pub use notifier::{send, Message, NotifyError};
pub use process::{platform_waiter, ProcessWaiter};
