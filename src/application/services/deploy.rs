//! Deployment orchestration and version-control inspection.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::locks::EnvLocks;
use crate::application::ports::RemoteExecutor;
use crate::application::stream::LineStream;
use crate::commands::deploy;
use crate::domain::environment::Environment;

/// Snapshot rows requested when the caller does not name a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Start a deployment and stream the script's combined output as it runs.
/// The environment lock is held until the stream is dropped.
///
/// # Errors
///
/// Returns an error when the deployment cannot be started.
pub async fn deploy(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<LineStream> {
    let guard = locks.acquire(env).await;
    info!(environment = %env, "starting deployment");
    let stream = executor
        .stream(&deploy::deploy(env))
        .await
        .with_context(|| format!("deploying {env}"))?;
    Ok(stream.with_guard(guard))
}

/// Roll back to the previous deployment snapshot, streamed like a deploy.
///
/// # Errors
///
/// Returns an error when the rollback cannot be started.
pub async fn rollback(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<LineStream> {
    let guard = locks.acquire(env).await;
    info!(environment = %env, "rolling back deployment");
    let stream = executor
        .stream(&deploy::rollback(env))
        .await
        .with_context(|| format!("rolling back {env}"))?;
    Ok(stream.with_guard(guard))
}

/// Recent deployment snapshots, newest first, `limit` rows
/// ([`DEFAULT_HISTORY_LIMIT`] when `None`).
///
/// # Errors
///
/// Returns an error when the listing command fails.
pub async fn deploy_history(
    executor: &impl RemoteExecutor,
    env: Environment,
    limit: Option<usize>,
) -> Result<String> {
    let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let output = executor
        .run(&deploy::history(env, limit))
        .await
        .with_context(|| format!("listing deploy history for {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Condensed commit log of the environment's checkout.
///
/// # Errors
///
/// Returns an error when the log command fails.
pub async fn git_log(
    executor: &impl RemoteExecutor,
    env: Environment,
    limit: usize,
) -> Result<String> {
    let output = executor
        .run(&deploy::git_log(env, limit))
        .await
        .with_context(|| format!("reading git log for {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Currently checked-out branch name.
///
/// # Errors
///
/// Returns an error when the inspection command fails.
pub async fn current_branch(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&deploy::current_branch(env))
        .await
        .with_context(|| format!("reading current branch for {env}"))?;
    Ok(output.trim().to_string())
}

/// Short hash of the currently deployed commit.
///
/// # Errors
///
/// Returns an error when the inspection command fails.
pub async fn current_commit(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&deploy::current_commit(env))
        .await
        .with_context(|| format!("reading current commit for {env}"))?;
    Ok(output.trim().to_string())
}
