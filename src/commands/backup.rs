//! Database backup command builders.

use chrono::Utc;

use crate::domain::environment::{ContainerRole, Environment, container_name};

/// Substituted by the `list` command when the backup directory is missing
/// or holds no dumps.
pub const NO_BACKUPS_PLACEHOLDER: &str = "No backups found";

/// Dump the environment's database into a fresh timestamped file.
#[must_use]
pub fn create(env: Environment) -> String {
    create_at(env, &Utc::now().format("%Y%m%d_%H%M%S").to_string())
}

/// Deterministic variant of [`create`] for a known timestamp.
///
/// The trailing `&& echo` makes the reported success contingent on the dump
/// tool's own exit status rather than the shell redirect alone.
#[must_use]
pub fn create_at(env: Environment, timestamp: &str) -> String {
    let dir = env.backups_dir();
    let db = container_name(ContainerRole::Database, env);
    let file = format!("backup_{timestamp}.sql");
    format!(
        "mkdir -p {dir} && docker exec {db} pg_dump -U saturn saturn > {dir}/{file} \
         && echo 'Backup created: {file}'"
    )
}

/// List backup files newest-first. An absent or empty directory produces
/// the user-facing placeholder instead of a nonzero exit.
#[must_use]
pub fn list(env: Environment) -> String {
    format!(
        "cd {} 2>/dev/null && ls -1t *.sql 2>/dev/null || echo '{NO_BACKUPS_PLACEHOLDER}'",
        env.backups_dir()
    )
}

/// Pipe a validated backup file into the database console, error output
/// merged so failures are visible in the stream.
#[must_use]
pub fn restore_stream(env: Environment, filename: &str) -> String {
    let db = container_name(ContainerRole::Database, env);
    format!(
        "docker exec -i {db} psql -U saturn saturn < {}/{filename} 2>&1",
        env.backups_dir()
    )
}

/// Aggregate on-disk size of the backup directory. An absent directory
/// yields empty output, which the service substitutes with zero.
#[must_use]
pub fn size(env: Environment) -> String {
    format!("du -sh {} 2>/dev/null | cut -f1", env.backups_dir())
}
