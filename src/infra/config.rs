//! YAML-backed implementation of the `SettingsStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::SettingsStore;
use crate::domain::config::ConsoleSettings;

/// Environment variable overriding the settings file location.
pub const CONFIG_PATH_ENV: &str = "SATURN_CONSOLE_CONFIG";

/// Production `SettingsStore` backed by a YAML file on disk.
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    /// Store rooted at the default location, `~/.saturn-console/config.yaml`,
    /// unless `SATURN_CONSOLE_CONFIG` points elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an error when the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Ok(val) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(Self::with_path(PathBuf::from(val)));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".saturn-console").join("config.yaml")))
    }

    /// Store backed by an explicit file, used by tests with a temp dir.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<ConsoleSettings> {
        if !self.path.exists() {
            return Ok(ConsoleSettings::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))
    }

    fn save(&self, settings: &ConsoleSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(settings).context("cannot serialize settings")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("cannot write {}", self.path.display()))?;

        // The file may hold credentials (host, key path), keep it private.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", self.path.display()))?;
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
