//! Port trait definitions for the application layer.
//!
//! Ports are the contracts infrastructure must fulfill. This file imports
//! only from `crate::domain` and `crate::application::stream`, never from
//! `crate::infra` or `crate::commands`.

use std::path::Path;

use anyhow::Result;

use crate::application::stream::LineStream;
use crate::domain::config::{ConsoleSettings, SettingsPatch};
use crate::domain::error::RemoteError;

/// The remote session primitive: one already-composed shell command in,
/// text or a line stream out. The host/credential context is implicit in
/// the implementation, established at construction time.
#[allow(async_fn_in_trait)]
pub trait RemoteExecutor {
    /// Run `command` to completion and return the full captured stdout.
    /// No output is observable before completion.
    ///
    /// # Errors
    ///
    /// [`RemoteError::CommandFailed`] when the command exits nonzero,
    /// [`RemoteError::Connection`] when the transport fails.
    async fn run(&self, command: &str) -> Result<String, RemoteError>;

    /// Begin `command` immediately and return a forward-only stream of its
    /// combined output lines. A nonzero exit or transport failure surfaces
    /// at the point the next element is requested; lines already yielded
    /// stand. Dropping the stream cancels consumption early.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started at all.
    async fn stream(&self, command: &str) -> Result<LineStream, RemoteError>;
}

/// Abstracts settings persistence so services can be tested with a
/// temp-dir store.
pub trait SettingsStore {
    /// Load the persisted settings, or defaults when none exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<ConsoleSettings>;

    /// Persist the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, settings: &ConsoleSettings) -> Result<()>;

    /// Load, merge a partial update, persist, and return the result.
    ///
    /// # Errors
    ///
    /// Propagates `load`/`save` failures.
    fn apply_patch(&self, patch: SettingsPatch) -> Result<ConsoleSettings> {
        let mut settings = self.load()?;
        settings.merge(patch);
        self.save(&settings)?;
        Ok(settings)
    }

    /// Location of the backing file.
    fn path(&self) -> &Path;
}
