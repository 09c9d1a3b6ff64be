//! Job-run intervals and their nested downtime and production-count records.
//!
//! These are read-only inputs to the engine; their storage lifecycle belongs
//! to the persistence layer that materializes them. An interval with
//! `end == None` is open: the run (or stoppage) is still in progress at the
//! reference instant the caller supplies.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A downtime event nested within a job run.
///
/// `reason_category` carries the reason taxonomy string; only the exact
/// string `"Unplanned"` is semantically special (see
/// [`classify`](crate::engine::classify)). An open downtime event implies the
/// owning job run is effectively stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimeEvent {
    /// When the stoppage began.
    pub start: NaiveDateTime,
    /// When the stoppage ended, or `None` while it is ongoing.
    pub end: Option<NaiveDateTime>,
    /// Reason category from the downtime taxonomy, if recorded.
    #[serde(default)]
    pub reason_category: Option<String>,
}

/// A point-in-time production count delta reported by an operator or sensor.
///
/// Counts are deltas, not cumulative totals; the accumulator sums the
/// samples whose timestamps fall inside the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountSample {
    /// The instant the counts were reported.
    pub timestamp: NaiveDateTime,
    /// Units produced within tolerance.
    pub good_count: i64,
    /// Units rejected.
    pub reject_count: i64,
}

impl ProductionCountSample {
    /// Total units in this sample (good plus reject).
    pub fn total_count(&self) -> i64 {
        self.good_count + self.reject_count
    }
}

/// One continuous machine-operating episode.
///
/// At most one job run per machine may be open (`end == None`) at any
/// instant. That invariant is enforced at the write boundary, outside this
/// crate; the engine assumes it. Downtime events and count samples are
/// nested in their owning run, mirroring how the persistence layer
/// materializes them.
///
/// # Example
///
/// ```
/// use oee_engine::models::JobRunInterval;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let run = JobRunInterval {
///     start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(6, 0, 0).unwrap(),
///     end: None,
///     standard_cycle_seconds: Decimal::new(30, 0),
///     target_quantity: 500,
///     downtime_events: vec![],
///     production_counts: vec![],
/// };
/// assert!(run.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRunInterval {
    /// When the run started.
    pub start: NaiveDateTime,
    /// When the run ended, or `None` while the machine is still running it.
    pub end: Option<NaiveDateTime>,
    /// Standard cycle time of the product being run, in seconds.
    pub standard_cycle_seconds: Decimal,
    /// Planned output quantity for the work order behind this run.
    pub target_quantity: i64,
    /// Stoppages recorded during this run.
    #[serde(default)]
    pub downtime_events: Vec<DowntimeEvent>,
    /// Production counts reported during this run.
    #[serde(default)]
    pub production_counts: Vec<ProductionCountSample>,
}

impl JobRunInterval {
    /// Returns true while the run has no end timestamp.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Returns true when any nested downtime event is still open.
    pub fn has_open_downtime(&self) -> bool {
        self.downtime_events.iter().any(|d| d.end.is_none())
    }
}
