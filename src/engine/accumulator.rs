//! Per-shift interval accounting.
//!
//! Walks job-run and downtime intervals clipped to the shift window and
//! produces the raw quantities behind the OEE percentages: operating time,
//! planned and unplanned downtime, and production counts. A per-machine
//! [`accumulate`] feeds a cross-machine [`aggregate`].

use rust_decimal::Decimal;

use chrono::NaiveDateTime;

use crate::models::{JobRunInterval, ShiftWindow};

use super::downtime::{DowntimeCategory, classify};
use super::overlap::overlap_seconds;
use super::status::find_active_run;

/// Accumulated quantities for one machine over one shift window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineAccumulation {
    /// Run time net of unplanned downtime, clipped to the window.
    pub operating_seconds: i64,
    /// Planned downtime inside the window.
    pub planned_downtime_seconds: i64,
    /// Unplanned downtime inside the window.
    pub unplanned_downtime_seconds: i64,
    /// Total units (good plus reject) counted inside the window.
    pub total_count: i64,
    /// Good units counted inside the window.
    pub good_count: i64,
    /// Rejected units counted inside the window.
    pub reject_count: i64,
    /// Standard cycle time of the currently-open run's product, zero when no
    /// run is open or the product has no positive cycle time.
    pub standard_cycle_seconds: Decimal,
}

/// Accumulated quantities across every machine in a report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftAccumulation {
    /// Summed operating seconds across machines.
    pub operating_seconds: i64,
    /// Summed planned downtime seconds across machines.
    pub planned_downtime_seconds: i64,
    /// Summed unplanned downtime seconds across machines.
    pub unplanned_downtime_seconds: i64,
    /// Summed total units across machines.
    pub total_count: i64,
    /// Summed good units across machines.
    pub good_count: i64,
    /// Summed rejected units across machines.
    pub reject_count: i64,
    /// Average of the strictly-positive per-machine standard cycle times,
    /// zero when no machine reported one. Callers substitute 1 before the
    /// performance calculation to avoid a division by zero.
    pub avg_standard_cycle_seconds: Decimal,
}

/// Accumulates one machine's job runs over the shift window.
///
/// Each run whose span intersects the window is clipped to it; an open run's
/// effective end is `min(now, window.end)`. Downtime events are clipped to
/// the run's clipped span and classified; only the unplanned share reduces
/// the run's operating contribution (floored at zero). Count samples are
/// included when `window.start <= timestamp <= window.end` — point samples
/// keep the inclusive bounds the source data was recorded against, unlike
/// interval clipping which is half-open.
///
/// `operating + planned + unplanned` need not cover the whole window: a
/// machine with no job loaded leaves true idle gaps with no record at all.
///
/// Preconditions (enforced at the write boundary, not here): intervals are
/// well-formed (`end >= start` when present) and at most one run is open.
pub fn accumulate(
    window: &ShiftWindow,
    job_runs: &[JobRunInterval],
    now: NaiveDateTime,
) -> MachineAccumulation {
    // Open intervals never accrue past the window, nor past "now" when the
    // window itself is still live.
    let effective_now = now.min(window.end);

    let mut acc = MachineAccumulation::default();

    for run in job_runs {
        let run_end = run.end.unwrap_or(effective_now);
        let clipped_run = overlap_seconds(run.start, run_end, window.start, window.end);
        if clipped_run == 0 {
            continue;
        }

        let clip_start = run.start.max(window.start);
        let clip_end = run_end.min(window.end);

        let mut unplanned_in_run = 0i64;
        for event in &run.downtime_events {
            let event_end = event.end.unwrap_or(effective_now);
            let clipped = overlap_seconds(event.start, event_end, clip_start, clip_end);
            if clipped == 0 {
                continue;
            }
            match classify(event) {
                DowntimeCategory::Unplanned => {
                    unplanned_in_run += clipped;
                    acc.unplanned_downtime_seconds += clipped;
                }
                DowntimeCategory::Planned => {
                    acc.planned_downtime_seconds += clipped;
                }
            }
        }

        // Planned downtime does not reduce operating time; that is what
        // distinguishes Operating Time from Loading Time in this OEE variant.
        acc.operating_seconds += (clipped_run - unplanned_in_run).max(0);

        for sample in &run.production_counts {
            if sample.timestamp >= window.start && sample.timestamp <= window.end {
                acc.good_count += sample.good_count;
                acc.reject_count += sample.reject_count;
                acc.total_count += sample.total_count();
            }
        }
    }

    // The performance calculation scales by the cycle time of whatever is
    // currently running; historic runs in the window do not contribute one.
    if let Some(open) = find_active_run(job_runs)
        && open.standard_cycle_seconds > Decimal::ZERO
    {
        acc.standard_cycle_seconds = open.standard_cycle_seconds;
    }

    acc
}

/// Merges per-machine accumulations into a report-wide total.
///
/// Seconds and counts are summed; the standard cycle time is the average of
/// the machines reporting a strictly positive value, or zero when none do.
pub fn aggregate<I>(machines: I) -> ShiftAccumulation
where
    I: IntoIterator<Item = MachineAccumulation>,
{
    let mut total = ShiftAccumulation::default();
    let mut cycle_sum = Decimal::ZERO;
    let mut cycle_count = 0i64;

    for m in machines {
        total.operating_seconds += m.operating_seconds;
        total.planned_downtime_seconds += m.planned_downtime_seconds;
        total.unplanned_downtime_seconds += m.unplanned_downtime_seconds;
        total.total_count += m.total_count;
        total.good_count += m.good_count;
        total.reject_count += m.reject_count;
        if m.standard_cycle_seconds > Decimal::ZERO {
            cycle_sum += m.standard_cycle_seconds;
            cycle_count += 1;
        }
    }

    if cycle_count > 0 {
        total.avg_standard_cycle_seconds = cycle_sum / Decimal::from(cycle_count);
    }

    total
}
