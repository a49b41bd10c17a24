//! Artisan console service tests: migrations, seeding and cache sequences.

#![allow(clippy::expect_used)]

use saturn_console::application::locks::EnvLocks;
use saturn_console::application::services::console::{
    clear_cache, fresh_migrate, migrate, migrate_status, rebuild_caches, run_artisan, seed,
};
use saturn_console::domain::environment::Environment;
use saturn_console::domain::error::RemoteError;

use crate::mocks::ScriptedExecutor;

#[tokio::test]
async fn test_run_artisan_wraps_command_in_app_container_exec() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("OK\n".to_string())]);

    let output = run_artisan(&executor, Environment::Dev, "queue:restart")
        .await
        .expect("artisan succeeds");

    assert_eq!(output, "OK");
    assert_eq!(
        executor.commands(),
        vec!["docker exec saturn-dev php artisan queue:restart"]
    );
}

#[tokio::test]
async fn test_migrate_is_forced_and_locked() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("Nothing to migrate.\n".to_string())]);
    let locks = EnvLocks::new();

    let output = migrate(&executor, &locks, Environment::Production)
        .await
        .expect("migrate succeeds");

    assert_eq!(output, "Nothing to migrate.");
    assert_eq!(
        executor.commands(),
        vec!["docker exec saturn-production php artisan migrate --force"]
    );
    // Lock is released once the call returns.
    locks.acquire(Environment::Production).await;
}

#[tokio::test]
async fn test_fresh_migrate_rebuilds_schema() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("Dropped all tables.\n".to_string())]);
    let locks = EnvLocks::new();

    fresh_migrate(&executor, &locks, Environment::Dev)
        .await
        .expect("fresh migrate succeeds");

    assert_eq!(
        executor.commands(),
        vec!["docker exec saturn-dev php artisan migrate:fresh --force"]
    );
}

#[tokio::test]
async fn test_seed_defaults_to_database_seeder() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("Seeded.\n".to_string())]);
    let locks = EnvLocks::new();

    seed(&executor, &locks, Environment::Staging, None)
        .await
        .expect("seed succeeds");

    assert_eq!(
        executor.commands(),
        vec!["docker exec saturn-staging php artisan db:seed --class=DatabaseSeeder --force"]
    );
}

#[tokio::test]
async fn test_seed_accepts_explicit_class() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("Seeded.\n".to_string())]);
    let locks = EnvLocks::new();

    seed(&executor, &locks, Environment::Dev, Some("DemoSeeder"))
        .await
        .expect("seed succeeds");

    assert_eq!(
        executor.commands(),
        vec!["docker exec saturn-dev php artisan db:seed --class=DemoSeeder --force"]
    );
}

#[tokio::test]
async fn test_migrate_status_is_read_only() {
    let executor =
        ScriptedExecutor::with_responses(vec![Ok("Migration name ........ Ran\n".to_string())]);

    let output = migrate_status(&executor, Environment::Dev)
        .await
        .expect("status succeeds");

    assert_eq!(output, "Migration name ........ Ran");
}

#[tokio::test]
async fn test_clear_cache_runs_all_four_steps_in_order() {
    let executor = ScriptedExecutor::with_responses(vec![
        Ok("Application cache cleared.\n".to_string()),
        Ok("Configuration cache cleared.\n".to_string()),
        Ok("Route cache cleared.\n".to_string()),
        Ok("Compiled views cleared.\n".to_string()),
    ]);
    let locks = EnvLocks::new();

    let output = clear_cache(&executor, &locks, Environment::Dev)
        .await
        .expect("clear succeeds");

    assert_eq!(
        executor.commands(),
        vec![
            "docker exec saturn-dev php artisan cache:clear",
            "docker exec saturn-dev php artisan config:clear",
            "docker exec saturn-dev php artisan route:clear",
            "docker exec saturn-dev php artisan view:clear",
        ]
    );
    assert_eq!(
        output,
        "Application cache cleared.\nConfiguration cache cleared.\n\
         Route cache cleared.\nCompiled views cleared."
    );
}

#[tokio::test]
async fn test_clear_cache_stops_at_first_failing_step() {
    let executor = ScriptedExecutor::with_responses(vec![
        Ok("Application cache cleared.\n".to_string()),
        Err(RemoteError::CommandFailed {
            code: 1,
            stderr: "config store unavailable".to_string(),
        }),
    ]);
    let locks = EnvLocks::new();

    let result = clear_cache(&executor, &locks, Environment::Dev).await;

    assert!(result.is_err());
    // The route and view steps never ran.
    assert_eq!(executor.commands().len(), 2);
}

#[tokio::test]
async fn test_rebuild_caches_runs_three_steps_in_order() {
    let executor = ScriptedExecutor::with_responses(vec![
        Ok("Configuration cached.\n".to_string()),
        Ok("Routes cached.\n".to_string()),
        Ok("Views cached.\n".to_string()),
    ]);
    let locks = EnvLocks::new();

    rebuild_caches(&executor, &locks, Environment::Production)
        .await
        .expect("rebuild succeeds");

    assert_eq!(
        executor.commands(),
        vec![
            "docker exec saturn-production php artisan config:cache",
            "docker exec saturn-production php artisan route:cache",
            "docker exec saturn-production php artisan view:cache",
        ]
    );
}
