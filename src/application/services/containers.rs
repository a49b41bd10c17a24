//! Container monitoring and lifecycle orchestration.

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::application::locks::EnvLocks;
use crate::application::ports::RemoteExecutor;
use crate::application::stream::LineStream;
use crate::commands::docker;
use crate::domain::containers::{
    ContainerStats, ContainerStatusEntry, parse_stats_row, parse_status_line,
};
use crate::domain::environment::{Environment, expected_containers};
use crate::domain::error::RemoteError;

/// Resource snapshot for every expected container of `env`.
///
/// Always returns exactly four records, one per role, in role order. A
/// container that is stopped, missing, or reporting malformed output
/// contributes a zeroed degraded record instead of failing the whole query.
///
/// # Errors
///
/// Only a transport failure aborts the query; per-container command
/// failures degrade.
pub async fn container_stats(
    executor: &impl RemoteExecutor,
    env: Environment,
) -> Result<Vec<ContainerStats>> {
    let mut records = Vec::with_capacity(4);
    for name in expected_containers(env) {
        let record = match executor.run(&docker::stats(&name)).await {
            Ok(output) => match first_content_line(&output).and_then(|row| parse_stats_row(&name, row)) {
                Some(stats) => stats,
                None => {
                    warn!(container = %name, "malformed stats row, recording as stopped");
                    ContainerStats::stopped(&name)
                }
            },
            Err(RemoteError::CommandFailed { .. }) => {
                warn!(container = %name, "stats query failed, recording as stopped");
                ContainerStats::stopped(&name)
            }
            Err(err @ RemoteError::Connection(_)) => {
                return Err(err).with_context(|| format!("querying stats for {env}"));
            }
        };
        records.push(record);
    }
    Ok(records)
}

/// (name, state, health) for the environment's containers.
///
/// Rows are restricted to the environment's exact expected names; the
/// daemon-side filter narrows the listing, but exact-set membership is the
/// guarantee against another environment's containers leaking in.
///
/// # Errors
///
/// Returns an error when the listing command fails.
pub async fn container_status(
    executor: &impl RemoteExecutor,
    env: Environment,
) -> Result<Vec<ContainerStatusEntry>> {
    let output = executor
        .run(&docker::status(env))
        .await
        .with_context(|| format!("listing container status for {env}"))?;
    let expected = expected_containers(env);
    let entries = output
        .lines()
        .filter_map(parse_status_line)
        .filter(|entry| expected.contains(&entry.name))
        .collect();
    Ok(entries)
}

/// Human-readable container table for the environment.
///
/// # Errors
///
/// Returns an error when the listing command fails.
pub async fn container_ps(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&docker::ps(env))
        .await
        .with_context(|| format!("listing containers for {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Restart one container by exact name. The name must belong to `env`.
///
/// # Errors
///
/// Returns an error for a name outside the environment's container set, or
/// when the restart command fails.
pub async fn restart_container(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
    name: &str,
) -> Result<String> {
    require_known_container(env, name)?;
    let _guard = locks.acquire(env).await;
    info!(environment = %env, container = name, "restarting container");
    let output = executor
        .run(&docker::restart(name))
        .await
        .with_context(|| format!("restarting {name}"))?;
    Ok(output.trim().to_string())
}

/// Stop one container by exact name.
///
/// # Errors
///
/// Same contract as [`restart_container`].
pub async fn stop_container(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
    name: &str,
) -> Result<String> {
    require_known_container(env, name)?;
    let _guard = locks.acquire(env).await;
    info!(environment = %env, container = name, "stopping container");
    let output = executor
        .run(&docker::stop(name))
        .await
        .with_context(|| format!("stopping {name}"))?;
    Ok(output.trim().to_string())
}

/// Start one container by exact name.
///
/// # Errors
///
/// Same contract as [`restart_container`].
pub async fn start_container(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
    name: &str,
) -> Result<String> {
    require_known_container(env, name)?;
    let _guard = locks.acquire(env).await;
    info!(environment = %env, container = name, "starting container");
    let output = executor
        .run(&docker::start(name))
        .await
        .with_context(|| format!("starting {name}"))?;
    Ok(output.trim().to_string())
}

/// Stream recent log lines from one container. Read-only, so no
/// environment lock is taken.
///
/// # Errors
///
/// Returns an error for an unknown name or when the log command cannot be
/// started.
pub async fn container_logs(
    executor: &impl RemoteExecutor,
    env: Environment,
    name: &str,
    tail: usize,
) -> Result<LineStream> {
    require_known_container(env, name)?;
    executor
        .stream(&docker::logs(name, tail))
        .await
        .with_context(|| format!("tailing logs for {name}"))
}

fn require_known_container(env: Environment, name: &str) -> Result<()> {
    if expected_containers(env).iter().any(|n| n == name) {
        Ok(())
    } else {
        bail!("container {name} does not belong to environment {env}");
    }
}

fn first_content_line(output: &str) -> Option<&str> {
    output.lines().find(|line| !line.trim().is_empty())
}
