//! Per-environment mutual exclusion for mutating operations.
//!
//! The source system allowed unbounded concurrent operations against one
//! environment; this lock set closes that gap so a deploy and a migration
//! (for example) cannot interleave. Independent environments still proceed
//! concurrently.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::environment::Environment;

/// One async lock per environment. Clones share the same underlying locks.
#[derive(Debug, Clone, Default)]
pub struct EnvLocks {
    dev: Arc<Mutex<()>>,
    staging: Arc<Mutex<()>>,
    production: Arc<Mutex<()>>,
}

impl EnvLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `env`, waiting while another mutating operation
    /// holds it. The guard is owned so streamed operations can carry it for
    /// the stream's lifetime.
    pub async fn acquire(&self, env: Environment) -> OwnedMutexGuard<()> {
        let lock = match env {
            Environment::Dev => &self.dev,
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        };
        Arc::clone(lock).lock_owned().await
    }
}
