use std::path::PathBuf;
use thiserror::Error;

use crate::notifier::NotifyError;

#[derive(Error, Debug)]
pub enum TnError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config file at {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid PID {0:?}: expected a positive integer")]
    InvalidPid(String),

    #[error("Cannot observe process {pid}: {reason}")]
    ProcessNotFound { pid: u32, reason: String },

    #[error("Waiting for process {pid} failed: {reason}")]
    ProcessWait { pid: u32, reason: String },

    #[error("No command specified. Usage: tn run <command> [args...]")]
    NoCommand,

    #[error("Failed to run command: {0}")]
    Spawn(String),

    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),

    #[error("Notification failed: {0}")]
    Notify(#[from] NotifyError),

    #[error("Signal handler error: {0}")]
    SignalHandler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TnError>;
