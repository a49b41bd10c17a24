//! Pure identifier validation. No I/O, no async.
//!
//! These checks run before any path interpolation to prevent path traversal
//! (CWE-22) and shell injection through user-supplied identifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// Required suffix for restorable backup files.
pub const BACKUP_SUFFIX: &str = ".sql";

/// Safe allow-list for backup filenames.
static BACKUP_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid regex")
});

/// Identifier grammar for environment-variable keys.
static ENV_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex")
});

/// Validate a user-supplied backup filename before it is interpolated into
/// a restore command.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first violated rule: path
/// separators, `..` segments, a missing `.sql` suffix, or characters
/// outside the allow-list.
pub fn validate_backup_filename(name: &str) -> Result<(), ValidationError> {
    if name.contains('/') || name.contains('\\') {
        return Err(ValidationError::FilenamePathSeparator(name.to_string()));
    }
    if name.contains("..") {
        return Err(ValidationError::FilenameTraversal(name.to_string()));
    }
    if !name.ends_with(BACKUP_SUFFIX) {
        return Err(ValidationError::FilenameSuffix(
            name.to_string(),
            BACKUP_SUFFIX,
        ));
    }
    if !BACKUP_CHARSET_RE.is_match(name) {
        return Err(ValidationError::FilenameCharset(name.to_string()));
    }
    Ok(())
}

/// Validate an environment-variable key before it is interpolated into a
/// lookup command.
///
/// # Errors
///
/// Returns [`ValidationError::EnvKey`] for the empty string, a leading
/// digit, whitespace, or any shell metacharacter.
pub fn validate_env_key(key: &str) -> Result<(), ValidationError> {
    if ENV_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ValidationError::EnvKey(key.to_string()))
    }
}
