//! Container snapshot types and output-row parsers.
//!
//! Parsers are total: malformed rows yield `None`, never a panic or error.
//! The degraded-record policy lives here because an unreachable container
//! is an expected steady state, not an exceptional one.

use serde_json::Value;

/// Delimiter emitted by the docker `--format` templates used by the builders.
pub const STATS_DELIMITER: char = '\t';

/// Observed run state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Running,
    Stopped,
}

impl ContainerState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Stopped => "stopped",
        }
    }
}

/// Transient resource snapshot for one container.
///
/// Reconstructed on every query, never cached. Resource figures are kept as
/// the tool's human-readable strings (`"12.5MiB"`, `"0.03%"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStats {
    pub name: String,
    pub state: ContainerState,
    pub cpu_percent: String,
    pub memory_used: String,
    pub memory_limit: String,
    pub memory_percent: String,
    pub network_io: String,
    pub block_io: String,
}

impl ContainerStats {
    /// Degraded record for an unreachable or malformed-reporting container.
    #[must_use]
    pub fn stopped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ContainerState::Stopped,
            cpu_percent: "0%".to_string(),
            memory_used: "0B".to_string(),
            memory_limit: "0B".to_string(),
            memory_percent: "0%".to_string(),
            network_io: "0B / 0B".to_string(),
            block_io: "0B / 0B".to_string(),
        }
    }
}

/// Transient (name, state, health) row from a container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStatusEntry {
    pub name: String,
    pub state: String,
    pub health: String,
}

/// Parse one tab-separated `docker stats` row for `name`.
///
/// Schema: cpu%, mem-usage (`used / limit`), mem%, net-io, block-io after
/// the leading name field. A row with fewer fields than the schema requires
/// yields `None`; a well-formed row implies the container is running (the
/// stats tool emits no explicit status column).
#[must_use]
pub fn parse_stats_row(name: &str, row: &str) -> Option<ContainerStats> {
    let fields: Vec<&str> = row.trim().split(STATS_DELIMITER).collect();
    if fields.len() < 6 {
        return None;
    }
    let (used, limit) = fields[2].split_once(" / ").unwrap_or((fields[2], "0B"));
    Some(ContainerStats {
        name: name.to_string(),
        state: ContainerState::Running,
        cpu_percent: fields[1].to_string(),
        memory_used: used.to_string(),
        memory_limit: limit.to_string(),
        memory_percent: fields[3].to_string(),
        network_io: fields[4].to_string(),
        block_io: fields[5].to_string(),
    })
}

/// Parse one `docker ps --format '{{json .}}'` line.
///
/// Lines that are not valid JSON objects with `Names` and `State` fields
/// yield `None` and are skipped by the caller.
#[must_use]
pub fn parse_status_line(line: &str) -> Option<ContainerStatusEntry> {
    let row: Value = serde_json::from_str(line.trim()).ok()?;
    let name = row.get("Names")?.as_str()?.to_string();
    let state = row.get("State")?.as_str()?.to_string();
    let health = row
        .get("Status")
        .and_then(Value::as_str)
        .map_or("none", health_from_status)
        .to_string();
    Some(ContainerStatusEntry {
        name,
        state,
        health,
    })
}

/// Extract the health annotation docker embeds in the human status text,
/// e.g. `"Up 2 hours (healthy)"`.
#[must_use]
pub fn health_from_status(status: &str) -> &'static str {
    if status.contains("(healthy)") {
        "healthy"
    } else if status.contains("(unhealthy)") {
        "unhealthy"
    } else if status.contains("(health: starting)") {
        "starting"
    } else {
        "none"
    }
}
