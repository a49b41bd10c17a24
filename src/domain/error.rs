//! Typed domain error enums.
//!
//! Zero imports from `crate::infra`, `crate::commands`, `tokio`, `std::fs`,
//! or `std::process`. All types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator at the service boundary.

use thiserror::Error;

/// Input validation failures, raised synchronously before any remote call.
///
/// The hard invariant: a command guarded by one of these checks is never
/// built, and the remote executor is never invoked, when validation fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid backup filename '{0}': path separators are not allowed")]
    FilenamePathSeparator(String),

    #[error("invalid backup filename '{0}': parent-directory segments are not allowed")]
    FilenameTraversal(String),

    #[error("invalid backup filename '{0}': must end in '{1}'")]
    FilenameSuffix(String, &'static str),

    #[error("invalid backup filename '{0}': only letters, digits, '-', '_' and '.' are allowed")]
    FilenameCharset(String),

    #[error(
        "invalid environment key '{0}': must start with a letter or underscore \
         and contain only letters, digits and underscores"
    )]
    EnvKey(String),
}

/// Remote execution failures surfaced by the executor.
///
/// `Connection` covers the transport (the command may never have run);
/// `CommandFailed` means the command ran on the host and exited nonzero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("ssh connection failed: {0}")]
    Connection(String),

    #[error("remote command exited with status {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },
}
