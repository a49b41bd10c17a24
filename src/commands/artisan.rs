//! Application-console (artisan) command builders.

use crate::domain::environment::{ContainerRole, Environment, container_name};

/// Seeder class used when the caller does not name one.
pub const DEFAULT_SEEDER: &str = "DatabaseSeeder";

/// Cache-clear steps in their required order; later clears depend on the
/// earlier ones having run.
pub const CACHE_CLEAR_SEQUENCE: [&str; 4] =
    ["cache:clear", "config:clear", "route:clear", "view:clear"];

/// Cache-rebuild steps in their required order.
pub const CACHE_REBUILD_SEQUENCE: [&str; 3] = ["config:cache", "route:cache", "view:cache"];

/// Run an arbitrary artisan command inside the environment's app container.
#[must_use]
pub fn run(env: Environment, command: &str) -> String {
    let app = container_name(ContainerRole::App, env);
    format!("docker exec {app} php artisan {command}")
}

#[must_use]
pub fn migrate(env: Environment) -> String {
    run(env, "migrate --force")
}

#[must_use]
pub fn fresh_migrate(env: Environment) -> String {
    run(env, "migrate:fresh --force")
}

#[must_use]
pub fn seed(env: Environment, class: Option<&str>) -> String {
    run(
        env,
        &format!("db:seed --class={} --force", class.unwrap_or(DEFAULT_SEEDER)),
    )
}

#[must_use]
pub fn migrate_status(env: Environment) -> String {
    run(env, "migrate:status")
}
