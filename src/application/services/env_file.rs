//! Application env-file inspection.

use anyhow::{Context, Result};

use crate::application::ports::RemoteExecutor;
use crate::commands::env_file;
use crate::domain::env_file::{EnvVarMap, parse_env_string};
use crate::domain::environment::Environment;
use crate::domain::validate::validate_env_key;

/// Reported when two environments' env files have no textual differences.
pub const IDENTICAL: &str = "Files are identical";

/// Read and parse the environment's application env file into an ordered
/// key/value map.
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub async fn read_env_file(executor: &impl RemoteExecutor, env: Environment) -> Result<EnvVarMap> {
    let output = executor
        .run(&env_file::read(env))
        .await
        .with_context(|| format!("reading env file for {env}"))?;
    Ok(parse_env_string(&output))
}

/// Look up one validated key in the environment's env file. A missing key
/// reports as the empty string.
///
/// # Errors
///
/// Returns a validation error for an unsafe key, or a remote error when the
/// lookup command fails.
pub async fn get_env_value(
    executor: &impl RemoteExecutor,
    env: Environment,
    key: &str,
) -> Result<String> {
    validate_env_key(key)?;
    let output = executor
        .run(&env_file::get(env, key))
        .await
        .with_context(|| format!("reading {key} from {env} env file"))?;
    Ok(output.trim().to_string())
}

/// Unified diff between two environments' env files, or [`IDENTICAL`] when
/// they match.
///
/// # Errors
///
/// Returns an error when either file is unreadable or the diff tool itself
/// fails.
pub async fn diff_env_files(
    executor: &impl RemoteExecutor,
    a: Environment,
    b: Environment,
) -> Result<String> {
    let output = executor
        .run(&env_file::diff(a, b))
        .await
        .with_context(|| format!("diffing env files of {a} and {b}"))?;
    if output.trim().is_empty() {
        Ok(IDENTICAL.to_string())
    } else {
        Ok(output.trim_end().to_string())
    }
}
