//! Typed console settings with per-field defaults and partial merge.
//!
//! The connection context is an explicit value constructed once and passed
//! into the executor's constructor, never a hidden module-level global.

use serde::{Deserialize, Serialize};

use crate::domain::environment::Environment;

/// Connection and console settings persisted by the settings store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Remote host address. Empty until first configured.
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Path to the SSH private key, as passed to `ssh -i`.
    pub private_key: String,
    /// Dashboard refresh interval, seconds.
    pub poll_interval_secs: u64,
    /// Channel capacity for streamed log output, in lines.
    pub log_buffer_lines: usize,
    pub default_environment: Environment,
    /// Source repository identifier, `owner/name`.
    pub repository: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 22,
            username: "root".to_string(),
            private_key: "~/.ssh/id_rsa".to_string(),
            poll_interval_secs: 5,
            log_buffer_lines: 200,
            default_environment: Environment::Dev,
            repository: "saturn/saturn".to_string(),
        }
    }
}

/// Partial settings update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub private_key: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub log_buffer_lines: Option<usize>,
    pub default_environment: Option<Environment>,
    pub repository: Option<String>,
}

impl ConsoleSettings {
    /// Apply a partial update, field by field, without clobbering siblings.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(host) = patch.host {
            self.host = host;
        }
        if let Some(port) = patch.port {
            self.port = port;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(private_key) = patch.private_key {
            self.private_key = private_key;
        }
        if let Some(poll) = patch.poll_interval_secs {
            self.poll_interval_secs = poll;
        }
        if let Some(lines) = patch.log_buffer_lines {
            self.log_buffer_lines = lines;
        }
        if let Some(env) = patch.default_environment {
            self.default_environment = env;
        }
        if let Some(repository) = patch.repository {
            self.repository = repository;
        }
    }
}
