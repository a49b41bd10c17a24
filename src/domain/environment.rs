//! Environments, container roles and the host naming conventions.
//!
//! Pure functions only; the (role, environment) to container-name mapping is
//! total and injective, reproducible without remote lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed product identifier; also the app container's name prefix.
pub const SERVICE: &str = "saturn";

/// Per-environment root directories live under this path on the host.
pub const DATA_ROOT: &str = "/srv/saturn";

/// One of the three isolated deployment targets sharing the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Dev,
        Environment::Staging,
        Environment::Production,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// `<data-root>/<env>`
    #[must_use]
    pub fn root(self) -> String {
        format!("{DATA_ROOT}/{}", self.as_str())
    }

    /// Source checkout: `<data-root>/<env>/source`
    #[must_use]
    pub fn source_dir(self) -> String {
        format!("{}/source", self.root())
    }

    /// Application env file: `<data-root>/<env>/source/.env`
    #[must_use]
    pub fn env_file(self) -> String {
        format!("{}/.env", self.source_dir())
    }

    /// Database dumps: `<data-root>/<env>/backups`
    #[must_use]
    pub fn backups_dir(self) -> String {
        format!("{}/backups", self.root())
    }

    /// Deployment snapshots: `<data-root>/<env>/source/deploy/backups`
    #[must_use]
    pub fn deploy_history_dir(self) -> String {
        format!("{}/deploy/backups", self.source_dir())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional category of a container within one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    App,
    Database,
    Cache,
    Realtime,
}

impl ContainerRole {
    pub const ALL: [ContainerRole; 4] = [
        ContainerRole::App,
        ContainerRole::Database,
        ContainerRole::Cache,
        ContainerRole::Realtime,
    ];

    /// Name prefix of the role's container. The app role uses the bare
    /// product identifier; the others are scoped by role.
    #[must_use]
    pub fn name_prefix(self) -> &'static str {
        match self {
            ContainerRole::App => SERVICE,
            ContainerRole::Database => "db",
            ContainerRole::Cache => "redis",
            ContainerRole::Realtime => "reverb",
        }
    }
}

/// Deterministic container name for a (role, environment) pair.
#[must_use]
pub fn container_name(role: ContainerRole, env: Environment) -> String {
    format!("{}-{}", role.name_prefix(), env.as_str())
}

/// The full, fixed set of container names an environment is expected to run.
#[must_use]
pub fn expected_containers(env: Environment) -> [String; 4] {
    ContainerRole::ALL.map(|role| container_name(role, env))
}
