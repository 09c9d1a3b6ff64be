//! Request types for the OEE engine API.
//!
//! This module defines the JSON request structures for the `/report`
//! endpoint. The caller ships a fully-materialized snapshot: the reference
//! instant, the shift selection, and every machine's job runs with nested
//! downtime events and production counts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    DowntimeEvent, JobRunInterval, MachineSnapshot, ProductionCountSample, ShiftDefinition,
};

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The reference instant; the engine never reads a clock of its own.
    pub now: NaiveDateTime,
    /// Explicit shift selection; omitted means auto-detect from `now`.
    #[serde(default)]
    pub shift_id: Option<u32>,
    /// Explicit shift date; pins the occurrence, bypassing today/yesterday
    /// inference.
    #[serde(default)]
    pub shift_date: Option<NaiveDate>,
    /// Per-request shift catalog override. Omitted means the configured
    /// catalog applies; an empty list forces the default window.
    #[serde(default)]
    pub shifts: Option<Vec<ShiftDefinitionRequest>>,
    /// The machines to report on.
    pub machines: Vec<MachineSnapshotRequest>,
}

/// Shift-definition information in a report request's catalog override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDefinitionRequest {
    /// Unique identifier for the shift.
    pub id: u32,
    /// Display name of the shift.
    pub name: String,
    /// Wall-clock time the shift starts.
    pub start_time: NaiveTime,
    /// Wall-clock time the shift ends; earlier than `start_time` means the
    /// shift spans midnight.
    pub end_time: NaiveTime,
}

/// One machine's snapshot in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineSnapshotRequest {
    /// Unique machine identifier.
    pub id: String,
    /// Display name of the machine.
    pub name: String,
    /// Job runs relevant to the reporting window.
    #[serde(default)]
    pub job_runs: Vec<JobRunRequest>,
}

/// Job-run information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRunRequest {
    /// When the run started.
    pub start: NaiveDateTime,
    /// When the run ended; `null` while still running.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Standard cycle time of the product being run, in seconds.
    #[serde(default)]
    pub standard_cycle_seconds: Decimal,
    /// Planned output quantity for the work order behind this run.
    #[serde(default)]
    pub target_quantity: i64,
    /// Stoppages recorded during this run.
    #[serde(default)]
    pub downtime_events: Vec<DowntimeEventRequest>,
    /// Production counts reported during this run.
    #[serde(default)]
    pub production_counts: Vec<CountSampleRequest>,
}

/// Downtime-event information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DowntimeEventRequest {
    /// When the stoppage began.
    pub start: NaiveDateTime,
    /// When the stoppage ended; `null` while ongoing.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Reason category from the downtime taxonomy.
    #[serde(default)]
    pub reason_category: Option<String>,
}

/// Production-count information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountSampleRequest {
    /// The instant the counts were reported.
    pub timestamp: NaiveDateTime,
    /// Units produced within tolerance.
    #[serde(default)]
    pub good_count: i64,
    /// Units rejected.
    #[serde(default)]
    pub reject_count: i64,
}

impl From<ShiftDefinitionRequest> for ShiftDefinition {
    fn from(req: ShiftDefinitionRequest) -> Self {
        ShiftDefinition {
            id: req.id,
            name: req.name,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl From<MachineSnapshotRequest> for MachineSnapshot {
    fn from(req: MachineSnapshotRequest) -> Self {
        MachineSnapshot {
            id: req.id,
            name: req.name,
            job_runs: req.job_runs.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<JobRunRequest> for JobRunInterval {
    fn from(req: JobRunRequest) -> Self {
        JobRunInterval {
            start: req.start,
            end: req.end,
            standard_cycle_seconds: req.standard_cycle_seconds,
            target_quantity: req.target_quantity,
            downtime_events: req.downtime_events.into_iter().map(Into::into).collect(),
            production_counts: req.production_counts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DowntimeEventRequest> for DowntimeEvent {
    fn from(req: DowntimeEventRequest) -> Self {
        DowntimeEvent {
            start: req.start,
            end: req.end,
            reason_category: req.reason_category,
        }
    }
}

impl From<CountSampleRequest> for ProductionCountSample {
    fn from(req: CountSampleRequest) -> Self {
        ProductionCountSample {
            timestamp: req.timestamp,
            good_count: req.good_count,
            reject_count: req.reject_count,
        }
    }
}
