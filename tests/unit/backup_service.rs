//! Backup service orchestration tests.

#![allow(clippy::expect_used)]

use saturn_console::application::locks::EnvLocks;
use saturn_console::application::services::backup::{
    EMPTY_SIZE, backup_size, create_backup, list_backups, restore_backup,
};
use saturn_console::domain::environment::Environment;
use saturn_console::domain::error::ValidationError;

use crate::mocks::{DisconnectedExecutor, ScriptedExecutor, UnreachableExecutor};

#[tokio::test]
async fn test_create_backup_returns_trimmed_confirmation() {
    let executor = ScriptedExecutor::with_responses(vec![Ok(
        "Backup created: backup_20250812_031500.sql\n".to_string(),
    )]);
    let locks = EnvLocks::new();

    let output = create_backup(&executor, &locks, Environment::Staging)
        .await
        .expect("backup succeeds");

    assert_eq!(output, "Backup created: backup_20250812_031500.sql");
    let commands = executor.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains("pg_dump -U saturn saturn"));
    assert!(commands[0].contains("/srv/saturn/staging/backups"));
}

#[tokio::test]
async fn test_create_backup_propagates_connection_failure() {
    let locks = EnvLocks::new();
    let result = create_backup(&DisconnectedExecutor, &locks, Environment::Dev).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_backups_returns_newest_first_listing() {
    let executor = ScriptedExecutor::with_responses(vec![Ok(
        "backup_20250812_031500.sql\nbackup_20250811_020000.sql\n".to_string(),
    )]);

    let output = list_backups(&executor, Environment::Production)
        .await
        .expect("listing succeeds");

    assert_eq!(
        output,
        "backup_20250812_031500.sql\nbackup_20250811_020000.sql"
    );
}

#[tokio::test]
async fn test_list_backups_passes_placeholder_through() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("No backups found\n".to_string())]);
    let output = list_backups(&executor, Environment::Dev)
        .await
        .expect("listing succeeds");
    assert_eq!(output, "No backups found");
}

#[tokio::test]
async fn test_restore_rejects_traversal_before_any_remote_call() {
    let locks = EnvLocks::new();
    let result = restore_backup(
        &UnreachableExecutor,
        &locks,
        Environment::Production,
        "../production/backups/backup.sql",
    )
    .await;

    let err = result.expect_err("traversal must be rejected");
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::FilenamePathSeparator(_))
    ));
}

#[tokio::test]
async fn test_restore_rejects_wrong_suffix_before_any_remote_call() {
    let locks = EnvLocks::new();
    let result = restore_backup(&UnreachableExecutor, &locks, Environment::Dev, "dump.tar").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_restore_streams_database_console_output() {
    let executor = ScriptedExecutor::with_stream(vec![
        Ok("SET".to_string()),
        Ok("CREATE TABLE".to_string()),
    ]);
    let locks = EnvLocks::new();

    let stream = restore_backup(
        &executor,
        &locks,
        Environment::Dev,
        "backup_20250101_000000.sql",
    )
    .await
    .expect("restore starts");

    assert_eq!(
        stream.collect_remaining().await.expect("drain"),
        "SET\nCREATE TABLE"
    );
    assert_eq!(
        executor.commands(),
        vec![
            "docker exec -i db-dev psql -U saturn saturn < \
             /srv/saturn/dev/backups/backup_20250101_000000.sql 2>&1"
        ]
    );
}

#[tokio::test]
async fn test_restore_holds_environment_lock_until_stream_drops() {
    let executor = ScriptedExecutor::with_stream(vec![Ok("done".to_string())]);
    let locks = EnvLocks::new();

    let stream = restore_backup(
        &executor,
        &locks,
        Environment::Dev,
        "backup_20250101_000000.sql",
    )
    .await
    .expect("restore starts");

    let contended = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        locks.acquire(Environment::Dev),
    )
    .await;
    assert!(contended.is_err(), "lock must be held while the stream lives");

    drop(stream);
    locks.acquire(Environment::Dev).await;
}

#[tokio::test]
async fn test_backup_size_reports_zero_for_missing_directory() {
    let executor = ScriptedExecutor::with_responses(vec![Ok(String::new())]);
    let size = backup_size(&executor, Environment::Staging)
        .await
        .expect("size succeeds");
    assert_eq!(size, EMPTY_SIZE);
}

#[tokio::test]
async fn test_backup_size_passes_human_readable_value_through() {
    let executor = ScriptedExecutor::with_responses(vec![Ok("156M\n".to_string())]);
    let size = backup_size(&executor, Environment::Production)
        .await
        .expect("size succeeds");
    assert_eq!(size, "156M");
}
