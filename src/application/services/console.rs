//! Application console (artisan) orchestration: migrations, seeding and
//! cache management.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::locks::EnvLocks;
use crate::application::ports::RemoteExecutor;
use crate::commands::artisan;
use crate::domain::environment::Environment;

/// Run one artisan command and return its trimmed output.
///
/// # Errors
///
/// Returns an error when the command fails or the host is unreachable.
pub async fn run_artisan(
    executor: &impl RemoteExecutor,
    env: Environment,
    command: &str,
) -> Result<String> {
    let output = executor
        .run(&artisan::run(env, command))
        .await
        .with_context(|| format!("running artisan {command} in {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Apply pending database migrations.
///
/// # Errors
///
/// Returns an error when the migration fails.
pub async fn migrate(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    info!(environment = %env, "running migrations");
    let output = executor
        .run(&artisan::migrate(env))
        .await
        .with_context(|| format!("migrating {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Drop all tables and re-run every migration from scratch.
///
/// # Errors
///
/// Returns an error when the rebuild fails.
pub async fn fresh_migrate(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    info!(environment = %env, "rebuilding database schema");
    let output = executor
        .run(&artisan::fresh_migrate(env))
        .await
        .with_context(|| format!("rebuilding schema for {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Seed the database, with the default seeder class when none is given.
///
/// # Errors
///
/// Returns an error when seeding fails.
pub async fn seed(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
    class: Option<&str>,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    info!(environment = %env, class = class.unwrap_or(artisan::DEFAULT_SEEDER), "seeding database");
    let output = executor
        .run(&artisan::seed(env, class))
        .await
        .with_context(|| format!("seeding {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Migration status table. Read-only, so no environment lock is taken.
///
/// # Errors
///
/// Returns an error when the status command fails.
pub async fn migrate_status(executor: &impl RemoteExecutor, env: Environment) -> Result<String> {
    let output = executor
        .run(&artisan::migrate_status(env))
        .await
        .with_context(|| format!("reading migration status for {env}"))?;
    Ok(output.trim_end().to_string())
}

/// Clear every application cache layer in the required order.
///
/// # Errors
///
/// Fails fast: the first failing step aborts the sequence and no later step
/// runs.
pub async fn clear_cache(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    info!(environment = %env, "clearing caches");
    run_sequence(executor, env, &artisan::CACHE_CLEAR_SEQUENCE).await
}

/// Rebuild the cached configuration, routes and views in order.
///
/// # Errors
///
/// Fails fast like [`clear_cache`].
pub async fn rebuild_caches(
    executor: &impl RemoteExecutor,
    locks: &EnvLocks,
    env: Environment,
) -> Result<String> {
    let _guard = locks.acquire(env).await;
    info!(environment = %env, "rebuilding caches");
    run_sequence(executor, env, &artisan::CACHE_REBUILD_SEQUENCE).await
}

/// Run a fixed sequence of artisan commands, joining their outputs. Stops
/// at the first failure so later steps never run against a half-applied
/// state.
async fn run_sequence(
    executor: &impl RemoteExecutor,
    env: Environment,
    commands: &[&str],
) -> Result<String> {
    let mut outputs = Vec::with_capacity(commands.len());
    for command in commands {
        let output = executor
            .run(&artisan::run(env, command))
            .await
            .with_context(|| format!("running artisan {command} in {env}"))?;
        outputs.push(output.trim_end().to_string());
    }
    Ok(outputs.join("\n"))
}
