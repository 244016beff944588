use crate::error::{Result, TnError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The config directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "term_notify";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "ntfy.sh";

/// Priority value that is never sent on the wire.
pub const DEFAULT_PRIORITY: &str = "default";

/// Environment variables that override the config file.
pub const ENV_SERVER: &str = "TN_SERVER";
pub const ENV_TOPIC: &str = "TN_TOPIC";
pub const ENV_TOKEN: &str = "TN_TOKEN";
pub const ENV_PRIORITY: &str = "TN_PRIORITY";

// ============================================================================
// Configuration Record
// ============================================================================

/// Settings supplied to every notification.
///
/// Missing fields in a config file fall back to their defaults, so a file
/// containing only `topic = "builds"` is valid.
///
/// # Example
///
/// ```toml
/// server = "ntfy.sh"
/// topic = "my-builds"
/// priority = "default"
/// token = ""
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Notification server hostname or base URL.
    #[serde(default = "default_server")]
    pub server: String,

    /// Topic the notifications are published to. Required for sending.
    #[serde(default)]
    pub topic: String,

    /// One of `min`, `low`, `default`, `high`, `max`.
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Bearer token for protected topics. Empty means no authentication.
    #[serde(default)]
    pub token: String,
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            topic: String::new(),
            priority: default_priority(),
            token: String::new(),
        }
    }
}

// ============================================================================
// Per-invocation Overrides
// ============================================================================

/// Values from global command-line flags.
///
/// These take precedence over both the config file and the environment, and
/// are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub server: Option<String>,
    pub topic: Option<String>,
    pub priority: Option<String>,
    /// Extra tags appended to every notification.
    pub tags: Option<String>,
}

impl Overrides {
    /// Apply the flag values onto a loaded config. Empty values are ignored.
    pub fn apply(&self, config: &mut Config) {
        let pairs = [
            (&self.server, &mut config.server),
            (&self.topic, &mut config.topic),
            (&self.priority, &mut config.priority),
        ];
        for (flag, field) in pairs {
            if let Some(v) = flag.as_deref().filter(|v| !v.is_empty()) {
                *field = v.to_string();
            }
        }
    }

    /// User-supplied tags, if any were given.
    pub fn user_tags(&self) -> Option<&str> {
        self.tags.as_deref().filter(|t| !t.is_empty())
    }
}

/// Append user tags after a command's built-in tag.
pub fn merge_tags(builtin: &str, user: Option<&str>) -> String {
    match user {
        Some(extra) if !extra.is_empty() => format!("{builtin},{extra}"),
        _ => builtin.to_string(),
    }
}

// ============================================================================
// Environment Overrides
// ============================================================================

/// Override config values with `TN_*` environment variables when they are set
/// and non-empty.
pub fn apply_env_overrides(config: &mut Config) {
    apply_env_overrides_with(config, |key| env::var(key).ok());
}

/// Same as [`apply_env_overrides`] with an injectable variable lookup.
pub fn apply_env_overrides_with<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let pairs = [
        (ENV_SERVER, &mut config.server),
        (ENV_TOPIC, &mut config.topic),
        (ENV_TOKEN, &mut config.token),
        (ENV_PRIORITY, &mut config.priority),
    ];
    for (key, field) in pairs {
        if let Some(v) = lookup(key).filter(|v| !v.is_empty()) {
            *field = v;
        }
    }
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the tn config directory path.
///
/// Uses the platform config directory: `$XDG_CONFIG_HOME` or `~/.config` on
/// Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on Windows.
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        TnError::Config("Could not determine the user config directory".to_string())
    })?;
    Ok(base.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load a config file from a specific path, without env overrides.
///
/// A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| TnError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the persisted config and apply environment overrides.
///
/// # Errors
///
/// Returns an error if:
/// - The config directory cannot be determined
/// - The config file exists but cannot be read
/// - The config file contains invalid TOML
pub fn load() -> Result<Config> {
    let mut config = load_from(&config_path()?)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Resolve the configuration for one invocation.
///
/// Precedence, lowest to highest: defaults, config file, environment, flags.
/// A config file that cannot be loaded is reported as a warning and the
/// defaults are used instead.
pub fn resolve(overrides: &Overrides) -> Config {
    let mut config = load().unwrap_or_else(|e| {
        crate::output::print_warning(&format!("could not load config: {}", e));
        let mut fallback = Config::default();
        apply_env_overrides(&mut fallback);
        fallback
    });
    overrides.apply(&mut config);
    log::debug!(
        "resolved config: server={} topic={} priority={}",
        config.server,
        config.topic,
        config.priority
    );
    config
}

/// Save the config to a specific path.
///
/// The parent directory is created owner-only (0700) and the file is written
/// owner read/write (0600) on unix.
pub fn save_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        create_private_dir(dir)?;
    }

    let content = generate_config_with_header(config)?;
    write_private_file(path, &content)?;
    log::debug!("wrote config to {}", path.display());

    Ok(())
}

fn generate_config_with_header(config: &Config) -> Result<String> {
    let body = toml::to_string(config)?;
    Ok(format!(
        "# term_notify configuration\n\
         # Environment variables TN_SERVER, TN_TOPIC, TN_TOKEN and TN_PRIORITY\n\
         # override these values; command-line flags override both.\n\n{body}"
    ))
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}

fn write_private_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;

    // `mode` only applies on creation; tighten files that already existed.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
