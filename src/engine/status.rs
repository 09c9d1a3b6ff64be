//! Real-time machine status resolution.
//!
//! A stateless two-state machine re-derived fresh on every call from the
//! current job-run facts; nothing is stored between calls.

use serde::{Deserialize, Serialize};

use crate::models::JobRunInterval;

/// Live status of a machine, shown as a dashboard badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    /// A job run is open and nothing is blocking it.
    Active,
    /// No open job run, or the open run has an open downtime event.
    Inactive,
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineStatus::Active => write!(f, "Active"),
            MachineStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Finds the machine's currently-open job run.
///
/// At most one run per machine is open by upstream invariant; should the
/// snapshot ever violate that, the latest-starting open run wins.
pub fn find_active_run(job_runs: &[JobRunInterval]) -> Option<&JobRunInterval> {
    job_runs
        .iter()
        .filter(|r| r.is_open())
        .max_by_key(|r| r.start)
}

/// Resolves the machine's live status from its active run.
///
/// An open downtime event always wins over the open run that contains it:
/// a machine mid-breakdown is `Inactive` even though its job run is open.
/// With no open run at all the machine is idle, also `Inactive`.
///
/// # Example
///
/// ```
/// use oee_engine::engine::{find_active_run, resolve_status, MachineStatus};
///
/// assert_eq!(resolve_status(find_active_run(&[])), MachineStatus::Inactive);
/// ```
pub fn resolve_status(active_run: Option<&JobRunInterval>) -> MachineStatus {
    match active_run {
        Some(run) if run.has_open_downtime() => MachineStatus::Inactive,
        Some(_) => MachineStatus::Active,
        None => MachineStatus::Inactive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DowntimeEvent;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn run(start: NaiveDateTime, end: Option<NaiveDateTime>) -> JobRunInterval {
        JobRunInterval {
            start,
            end,
            standard_cycle_seconds: Decimal::new(30, 0),
            target_quantity: 100,
            downtime_events: vec![],
            production_counts: vec![],
        }
    }

    // ==========================================================================
    // MS-001: open job run alone → Active
    // ==========================================================================
    #[test]
    fn test_ms_001_open_run_is_active() {
        let runs = vec![run(dt(6, 0), None)];
        assert_eq!(resolve_status(find_active_run(&runs)), MachineStatus::Active);
    }

    // ==========================================================================
    // MS-002: open downtime wins over the open run
    // ==========================================================================
    #[test]
    fn test_ms_002_open_downtime_wins() {
        let mut r = run(dt(6, 0), None);
        r.downtime_events.push(DowntimeEvent {
            start: dt(8, 0),
            end: None,
            reason_category: Some("Unplanned".to_string()),
        });
        let runs = vec![r];
        assert_eq!(resolve_status(find_active_run(&runs)), MachineStatus::Inactive);
    }

    // ==========================================================================
    // MS-003: no open run → Inactive
    // ==========================================================================
    #[test]
    fn test_ms_003_no_open_run_is_inactive() {
        let runs = vec![run(dt(6, 0), Some(dt(14, 0)))];
        assert_eq!(resolve_status(find_active_run(&runs)), MachineStatus::Inactive);
        assert_eq!(resolve_status(None), MachineStatus::Inactive);
    }

    // ==========================================================================
    // MS-004: closed downtime does not block the open run
    // ==========================================================================
    #[test]
    fn test_ms_004_closed_downtime_does_not_block() {
        let mut r = run(dt(6, 0), None);
        r.downtime_events.push(DowntimeEvent {
            start: dt(8, 0),
            end: Some(dt(8, 30)),
            reason_category: Some("Unplanned".to_string()),
        });
        let runs = vec![r];
        assert_eq!(resolve_status(find_active_run(&runs)), MachineStatus::Active);
    }

    // ==========================================================================
    // MS-005: latest-starting open run is the active one
    // ==========================================================================
    #[test]
    fn test_ms_005_latest_open_run_selected() {
        let old = run(dt(6, 0), None);
        let mut newer = run(dt(9, 0), None);
        newer.downtime_events.push(DowntimeEvent {
            start: dt(9, 30),
            end: None,
            reason_category: None,
        });
        let runs = vec![old, newer];

        let active = find_active_run(&runs).unwrap();
        assert_eq!(active.start, dt(9, 0));
        assert_eq!(resolve_status(Some(active)), MachineStatus::Inactive);
    }

    #[test]
    fn test_status_display_and_serialization() {
        assert_eq!(format!("{}", MachineStatus::Active), "Active");
        assert_eq!(format!("{}", MachineStatus::Inactive), "Inactive");
        assert_eq!(
            serde_json::to_string(&MachineStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
