//! Configuration display.

use super::colors::*;
use crate::config::Config;

/// Placeholder shown for empty values.
pub const NOT_SET: &str = "(not set)";

/// Return the value unchanged, or a placeholder when it is empty.
pub fn display_value(v: &str) -> &str {
    if v.is_empty() {
        NOT_SET
    } else {
        v
    }
}

/// Mask a token for display, keeping only its first and last four characters.
///
/// Tokens of eight characters or fewer are masked entirely.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return NOT_SET.to_string();
    }

    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

/// Print the effective settings, masking the token.
pub fn print_settings(config: &Config) {
    println!();
    println!("  {CYAN}server:{RESET}   {}", display_value(&config.server));
    println!("  {CYAN}topic:{RESET}    {}", display_value(&config.topic));
    println!("  {CYAN}priority:{RESET} {}", display_value(&config.priority));
    println!("  {CYAN}token:{RESET}    {}", mask_token(&config.token));
    println!();

    if config.topic.is_empty() {
        println!("{YELLOW}No topic set.{RESET} Run: {BOLD}tn config --topic <your-topic>{RESET}");
    }
}
