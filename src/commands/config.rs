//! Config command handler.
//!
//! Persists any given settings, then displays the effective configuration.

use std::path::Path;

use crate::config::{self, Config, Overrides};
use crate::error::Result;
use crate::output::{print_config_saved, print_settings};

/// Settings to persist. `None` and empty values leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub server: Option<String>,
    pub topic: Option<String>,
    pub priority: Option<String>,
    pub token: Option<String>,
}

impl ConfigUpdate {
    /// Collect the settable flags of one invocation.
    pub fn from_flags(overrides: &Overrides, token: Option<&str>) -> Self {
        Self {
            server: overrides.server.clone(),
            topic: overrides.topic.clone(),
            priority: overrides.priority.clone(),
            token: token.map(str::to_string),
        }
    }

    /// Whether there is anything to write.
    pub fn is_empty(&self) -> bool {
        [&self.server, &self.topic, &self.priority, &self.token]
            .iter()
            .all(|v| v.as_deref().map_or(true, str::is_empty))
    }

    pub fn apply(&self, config: &mut Config) {
        let pairs = [
            (&self.server, &mut config.server),
            (&self.topic, &mut config.topic),
            (&self.priority, &mut config.priority),
            (&self.token, &mut config.token),
        ];
        for (value, field) in pairs {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                *field = v.to_string();
            }
        }
    }
}

/// View or update the configuration file in the platform config directory.
///
/// `effective` is the configuration resolved for this invocation; it is what
/// gets displayed.
pub fn config_command(effective: Config, update: &ConfigUpdate) -> Result<()> {
    if update.is_empty() {
        print_settings(&effective);
        return Ok(());
    }
    config_command_at(&config::config_path()?, effective, update)
}

/// Same as [`config_command`] against an explicit file.
///
/// Only the stored file plus `update` is written, so environment values are
/// never persisted by accident.
pub fn config_command_at(path: &Path, mut effective: Config, update: &ConfigUpdate) -> Result<()> {
    if !update.is_empty() {
        let mut stored = config::load_from(path)?;
        update.apply(&mut stored);
        config::save_to(path, &stored)?;
        print_config_saved(path);
        update.apply(&mut effective);
    }

    print_settings(&effective);
    Ok(())
}
