//! Shell completion scripts for tn.
//!
//! Scripts are generated from the same clap definition the binary parses
//! with, so they never drift from the real flags.

use crate::cli::Cli;
use crate::error::{Result, TnError};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Binary name completions are registered for.
const BIN_NAME: &str = "tn";

/// Shell names accepted by `tn completions`.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish", "powershell"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl ShellType {
    /// Parse a shell name such as `zsh` or a path such as `/bin/zsh`.
    pub fn from_name(name: &str) -> Result<Self> {
        let base = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match base.to_ascii_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            "powershell" | "pwsh" => Ok(ShellType::PowerShell),
            _ => Err(TnError::UnsupportedShell(base.to_string())),
        }
    }

    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
            ShellType::PowerShell => Shell::PowerShell,
        }
    }

    /// Get the display name of the shell.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
            ShellType::PowerShell => "powershell",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Generate the completion script for a shell.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the completion script for a shell to stdout.
pub fn print_completion_script(shell: ShellType) -> Result<()> {
    let script = generate_completion_script(shell);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(script.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_names_and_paths() {
        assert_eq!(ShellType::from_name("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_name("/bin/zsh").unwrap(), ShellType::Zsh);
        assert_eq!(
            ShellType::from_name("/usr/local/bin/fish").unwrap(),
            ShellType::Fish
        );
        assert_eq!(ShellType::from_name("pwsh").unwrap(), ShellType::PowerShell);
        assert_eq!(ShellType::from_name("BASH").unwrap(), ShellType::Bash);
    }

    #[test]
    fn test_from_name_rejects_unknown_shell() {
        let err = ShellType::from_name("/bin/tcsh").unwrap_err();
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn test_display_matches_supported_names() {
        for name in SUPPORTED_SHELLS {
            let shell = ShellType::from_name(name).unwrap();
            assert_eq!(shell.to_string(), *name);
        }
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let script = generate_completion_script(ShellType::Bash);
        assert!(script.contains("tn"));
        assert!(script.contains("notify"));
        assert!(script.contains("--topic"));
    }

    #[test]
    fn test_zsh_script_is_compdef() {
        let script = generate_completion_script(ShellType::Zsh);
        assert!(script.starts_with("#compdef tn"));
    }
}
