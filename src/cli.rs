//! Command-line definition.

use clap::{Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "tn")]
#[command(
    version,
    about = "term_notify: get a push notification when terminal commands finish",
    long_about = "tn sends push notifications via ntfy when your terminal commands \
complete. Wrap a command, watch a PID, or send a quick notification.",
    after_help = "EXAMPLES:
    tn config --topic my-alerts         # Set the topic once
    tn run make -j8                     # Notify when the build finishes
    tn pid 12345                        # Notify when PID 12345 exits
    tn notify \"Deploy finished\"         # Send a one-off message
    tn -t builds -p high run npm test   # Override topic and priority

ENVIRONMENT:
    TN_SERVER, TN_TOPIC, TN_TOKEN, TN_PRIORITY override the config file.
    Command-line flags override both."
)]
pub struct Cli {
    /// ntfy server (default: ntfy.sh)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// ntfy topic name
    #[arg(short, long, global = true)]
    pub topic: Option<String>,

    /// Notification priority (min, low, default, high, max)
    #[arg(short, long, global = true)]
    pub priority: Option<String>,

    /// Comma-separated tags/emojis added to the notification
    #[arg(long, global = true)]
    pub tags: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flag values that override the loaded configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            server: self.server.clone(),
            topic: self.topic.clone(),
            priority: self.priority.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Exit code for a failed parse.
///
/// `--help` and `--version` are reported through the error path but exit 0.
/// Usage errors exit 1, the same as any other reported error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command and notify when it finishes
    #[command(after_help = "EXAMPLES:
    tn run npm run build
    tn run ping -c 5 127.0.0.1
    tn -t my-builds run make -j8

Everything after the command name is passed to it unchanged.
tn exits with the command's exit code.")]
    Run {
        /// The command and its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Watch a running process and notify when it exits
    #[command(after_help = "EXAMPLES:
    tn pid 12345
    tn pid --topic builds 12345")]
    Pid {
        /// Process ID to watch
        #[arg(value_name = "PROCESS_ID")]
        pid: String,
    },

    /// Send an ad-hoc notification
    #[command(after_help = "EXAMPLES:
    tn notify \"Build complete!\"
    make build; tn notify \"Build finished\"
    tn notify --title \"Deploy\" \"Deployed to production\"")]
    Notify {
        /// Notification title
        #[arg(long)]
        title: Option<String>,

        /// Message text; multiple words are joined with spaces
        #[arg(required = true, value_name = "MESSAGE")]
        message: Vec<String>,
    },

    /// View or update configuration
    #[command(after_help = "EXAMPLES:
    tn config --topic my-alerts            # Set the ntfy topic
    tn config --server ntfy.example.com    # Use a self-hosted server
    tn config --token tk_xxxxxxxx          # Authenticate to a protected topic
    tn config                              # Show current config

--server, --topic and --priority are saved when given to this command.")]
    Config {
        /// Set the auth token
        #[arg(long)]
        token: Option<String>,
    },

    /// Output shell completion script to stdout
    #[command(hide = true)]
    Completions {
        /// Shell type (bash, zsh, fish, or powershell)
        shell: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_keeps_command_flags_verbatim() {
        let cli = Cli::try_parse_from(["tn", "run", "ls", "-la", "--color", "-t"]).unwrap();
        match cli.command {
            Commands::Run { command } => assert_eq!(command, ["ls", "-la", "--color", "-t"]),
            other => panic!("expected run, got {other:?}"),
        }
        assert!(cli.topic.is_none());
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tn", "-t", "builds", "-p", "high", "--tags", "ci", "run", "make",
        ])
        .unwrap();
        assert_eq!(cli.topic.as_deref(), Some("builds"));
        assert_eq!(cli.priority.as_deref(), Some("high"));
        assert_eq!(cli.tags.as_deref(), Some("ci"));
        assert!(matches!(cli.command, Commands::Run { .. }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tn", "pid", "--topic", "builds", "12345"]).unwrap();
        assert_eq!(cli.topic.as_deref(), Some("builds"));
        match cli.command {
            Commands::Pid { pid } => assert_eq!(pid, "12345"),
            other => panic!("expected pid, got {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_a_command() {
        assert!(Cli::try_parse_from(["tn", "run"]).is_err());
    }

    #[test]
    fn test_usage_errors_exit_one() {
        for argv in [
            &["tn", "--bogus", "notify", "hi"][..],
            &["tn", "run"][..],
            &["tn", "pid"][..],
            &["tn", "launch"][..],
        ] {
            let err = Cli::try_parse_from(argv).unwrap_err();
            assert_eq!(parse_error_exit_code(&err), 1, "argv: {argv:?}");
        }
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        for argv in [
            &["tn", "--help"][..],
            &["tn", "run", "--help"][..],
            &["tn", "--version"][..],
        ] {
            let err = Cli::try_parse_from(argv).unwrap_err();
            assert_eq!(parse_error_exit_code(&err), 0, "argv: {argv:?}");
        }
    }

    #[test]
    fn test_notify_collects_words_and_title() {
        let cli =
            Cli::try_parse_from(["tn", "notify", "--title", "Deploy", "all", "done"]).unwrap();
        match cli.command {
            Commands::Notify { title, message } => {
                assert_eq!(title.as_deref(), Some("Deploy"));
                assert_eq!(message, ["all", "done"]);
            }
            other => panic!("expected notify, got {other:?}"),
        }
    }

    #[test]
    fn test_config_uses_global_flags() {
        let cli = Cli::try_parse_from(["tn", "config", "--topic", "alerts", "--token", "tk"])
            .unwrap();
        assert_eq!(cli.topic.as_deref(), Some("alerts"));
        match cli.command {
            Commands::Config { token } => assert_eq!(token.as_deref(), Some("tk")),
            other => panic!("expected config, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_mirror_flags() {
        let cli = Cli::try_parse_from(["tn", "-s", "example.com", "notify", "hi"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.server.as_deref(), Some("example.com"));
        assert!(overrides.topic.is_none());
        assert!(overrides.tags.is_none());
    }
}
