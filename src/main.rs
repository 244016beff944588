//! tn CLI entry point.
//!
//! Parses command-line arguments, resolves the configuration once, and
//! dispatches to the appropriate command handler.

use clap::Parser;
use log::LevelFilter;
use term_notify::cli::{parse_error_exit_code, Cli, Commands};
use term_notify::commands::{
    config_command, notify_command, pid_command, run_command, ConfigUpdate,
};
use term_notify::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use term_notify::config;
use term_notify::output::print_error;
use term_notify::process::platform_waiter;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("term_notify", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };
    init_logging(cli.verbose);

    let overrides = cli.overrides();

    let result = match &cli.command {
        // Completions don't need a config
        Commands::Completions { shell } => match ShellType::from_name(shell) {
            Ok(shell_type) => print_completion_script(shell_type).map(|()| 0),
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        },

        command => {
            let config = config::resolve(&overrides);

            match command {
                Commands::Run { command } => run_command(&config, &overrides, command),
                Commands::Pid { pid } => {
                    pid_command(&config, &overrides, pid, &platform_waiter()).map(|()| 0)
                }
                Commands::Notify { title, message } => {
                    notify_command(&config, &overrides, title.as_deref(), message).map(|()| 0)
                }
                Commands::Config { token } => {
                    let update = ConfigUpdate::from_flags(&overrides, token.as_deref());
                    config_command(config, &update).map(|()| 0)
                }
                // Completions already handled above
                Commands::Completions { .. } => unreachable!(),
            }
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
