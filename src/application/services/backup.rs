//! Database backup orchestration.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::locks::EnvLocks;
use crate::application::ports::RemoteExecutor;
use crate::application::stream::LineStream;
use crate::commands::backup;
use crate::domain::environment::Environment;
use crate::domain::validate::validate_backup_filename;

/// Reported size when the backup directory does not exist yet.
pub const EMPTY_SIZE: &str = "0B";

/// Create a fresh timestamped database dump and return the confirmation
/// line emitted by the remote command.
///
/// # Errors
///
/// Returns an error when the dump command fails or the host is unreachable.
pub async fn create_backup(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    let output = executor
        .run(&backup::create(env))
        .await
        .with_context(|| format!("creating backup for {env}"))?;
    info!(environment = %env, "backup created");
    Ok(output.trim().to_string())
}

/// List backup filenames newest-first, one per line. When no backups exist
/// the single placeholder line is returned unchanged.
///
/// # Errors
///
/// Returns an error when the listing command fails.
pub async fn list_backups(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&backup::list(env))
        .await
        .with_context(|| format!("listing backups for {env}"))?;
    Ok(output.trim().to_string())
}

/// Stream a restore of `filename` into the environment's database.
///
/// The filename is validated before any interpolation; the environment lock
/// is held until the returned stream is dropped.
///
/// # Errors
///
/// Returns a validation error for an unsafe filename, or a remote error when
/// the restore cannot be started.
pub async fn restore_backup(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
    filename: &str,
) -> Result<LineStream> {
    validate_backup_filename(filename)?;
    let guard = locks.acquire(env).await;
    info!(environment = %env, filename, "restoring backup");
    let stream = executor
        .stream(&backup::restore_stream(env, filename))
        .await
        .with_context(|| format!("restoring {filename} into {env}"))?;
    Ok(stream.with_guard(guard))
}

/// Aggregate on-disk size of the environment's backup directory,
/// e.g. `"156M"`. An absent directory reports as zero.
///
/// # Errors
///
/// Returns an error when the size command fails.
pub async fn backup_size(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&backup::size(env))
        .await
        .with_context(|| format!("measuring backup size for {env}"))?;
    let trimmed = output.trim();
    if trimmed.is_empty() {
        Ok(EMPTY_SIZE.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
