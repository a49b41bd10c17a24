//! Application env-file access command builders.

use crate::domain::environment::Environment;

/// Dump the raw env file.
#[must_use]
pub fn read(env: Environment) -> String {
    format!("cat {}", env.env_file())
}

/// Extract a single validated key's value: everything after the first `=`.
///
/// A missing key yields empty output with a zero exit (the pipeline's exit
/// status is `cut`'s), which the service reports as an empty value.
#[must_use]
pub fn get(env: Environment, key: &str) -> String {
    format!("grep -m1 '^{key}=' {} | cut -d= -f2-", env.env_file())
}

/// Side-by-side comparison of two environments' files.
///
/// `diff` exits 1 when the files differ, which is a normal outcome in this
/// domain; the guard suppresses it while letting genuine tool errors
/// (exit status 2 and above, e.g. file-not-found) fail the command.
#[must_use]
pub fn diff(a: Environment, b: Environment) -> String {
    format!("diff {} {} || [ $? -eq 1 ]", a.env_file(), b.env_file())
}
