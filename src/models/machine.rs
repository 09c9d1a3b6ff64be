//! Machine snapshot model.

use serde::{Deserialize, Serialize};

use super::JobRunInterval;

/// The fully-materialized per-machine input to a report computation.
///
/// Carries the machine's identity and every job run relevant to the
/// reporting window, with downtime events and production counts already
/// nested. The caller is responsible for reading a consistent snapshot; the
/// engine treats it as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Unique machine identifier.
    pub id: String,
    /// Display name of the machine.
    pub name: String,
    /// Job runs for this machine, including any still open.
    #[serde(default)]
    pub job_runs: Vec<JobRunInterval>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_without_runs() {
        let json = r#"{"id": "M-01", "name": "Press 1"}"#;
        let machine: MachineSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(machine.id, "M-01");
        assert!(machine.job_runs.is_empty());
    }
}
