//! Container inspection and control command builders.

use crate::domain::environment::Environment;

/// One tab-separated resource row for a named container.
///
/// `docker stats` exposes no status column; presence of a well-formed row
/// implies the container is running. The field order here is the contract
/// the stats parser relies on.
#[must_use]
pub fn stats(name: &str) -> String {
    format!(
        "docker stats --no-stream --format \
         '{{{{.Name}}}}\\t{{{{.CPUPerc}}}}\\t{{{{.MemUsage}}}}\\t{{{{.MemPerc}}}}\\t{{{{.NetIO}}}}\\t{{{{.BlockIO}}}}' \
         {name}"
    )
}

/// JSON-per-line listing restricted to the environment's containers.
///
/// The daemon's name filter is a regular expression; anchoring on the
/// `-<env>` suffix keeps names that merely contain the environment word
/// (and other environments' containers) out of the listing. The caller
/// still restricts rows to the environment's exact container set.
#[must_use]
pub fn status(env: Environment) -> String {
    format!("docker ps -a --filter 'name=-{env}$' --format '{{{{json .}}}}'")
}

/// Human-readable table of (names, status, ports, image), suffix-anchored
/// like [`status`]. The table is returned raw, without re-filtering.
#[must_use]
pub fn ps(env: Environment) -> String {
    format!(
        "docker ps -a --filter 'name=-{env}$' --format \
         'table {{{{.Names}}}}\\t{{{{.Status}}}}\\t{{{{.Ports}}}}\\t{{{{.Image}}}}'"
    )
}

#[must_use]
pub fn restart(name: &str) -> String {
    format!("docker restart {name}")
}

#[must_use]
pub fn stop(name: &str) -> String {
    format!("docker stop {name}")
}

#[must_use]
pub fn start(name: &str) -> String {
    format!("docker start {name}")
}

/// Tail recent log lines with timestamps, error output merged.
#[must_use]
pub fn logs(name: &str, tail: usize) -> String {
    format!("docker logs --tail {tail} --timestamps {name} 2>&1")
}
