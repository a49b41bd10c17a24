//! Deployment and version-control inspection command builders.

use crate::domain::environment::Environment;

/// Run the environment's deployment script with the environment identity
/// exported into the script's context, error output merged.
#[must_use]
pub fn deploy(env: Environment) -> String {
    format!(
        "cd {} && DEPLOY_ENV={env} ./deploy.sh 2>&1",
        env.source_dir()
    )
}

/// Roll back to the previous deployment snapshot.
#[must_use]
pub fn rollback(env: Environment) -> String {
    format!(
        "cd {} && DEPLOY_ENV={env} ./deploy.sh --rollback 2>&1",
        env.source_dir()
    )
}

/// List the `limit` most recent deployment snapshots.
///
/// `ls -lt` emits a `total` header row, so one extra line is requested.
#[must_use]
pub fn history(env: Environment, limit: usize) -> String {
    format!(
        "ls -lt {} 2>/dev/null | head -n {}",
        env.deploy_history_dir(),
        limit + 1
    )
}

/// Condensed commit log from the environment's source checkout.
#[must_use]
pub fn git_log(env: Environment, limit: usize) -> String {
    format!("cd {} && git log --oneline -{limit}", env.source_dir())
}

#[must_use]
pub fn current_branch(env: Environment) -> String {
    format!("cd {} && git rev-parse --abbrev-ref HEAD", env.source_dir())
}

#[must_use]
pub fn current_commit(env: Environment) -> String {
    format!("cd {} && git rev-parse --short HEAD", env.source_dir())
}
