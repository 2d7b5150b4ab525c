use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// The one instance this tool manages, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct InstanceSpec {
    pub name: String,
    pub config: PathBuf,
}

/// One line of `limactl list --json` output. Lima emits many more fields
/// (dir, arch, cpus, ...); only the two we branch on are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Where the managed instance currently stands. One variant per
/// reconcile branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    Absent,
    Running,
    Stopped(String),
}

/// Parse the JSONL output of `limactl list --json`, one object per line.
pub fn parse_records(raw: &str) -> Result<Vec<InstanceRecord>> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Ok(serde_json::from_str::<InstanceRecord>(line)?))
        .collect()
}

/// Find the named instance in a listing. Only the exact status string
/// "Running" counts as running; any other status of a present instance
/// lands in `Stopped` with the status preserved for display.
pub fn classify(records: &[InstanceRecord], name: &str) -> InstanceState {
    match records.iter().find(|record| record.name == name) {
        None => InstanceState::Absent,
        Some(record) if record.status == "Running" => InstanceState::Running,
        Some(record) => InstanceState::Stopped(record.status.clone()),
    }
}
