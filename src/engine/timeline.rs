//! Run/Stop/Idle state timeline for a machine over a shift window.
//!
//! The dashboard renders each machine as a horizontal bar of colored state
//! segments. This module builds that bar: job runs clipped to the window
//! become Run segments, downtime inside a run becomes Stop, and everything
//! uncovered — before the first run, between runs, after the last — is Idle.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{JobRunInterval, ShiftWindow};

/// The machine state represented by one timeline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineState {
    /// A job run was in progress.
    Run,
    /// A downtime event interrupted the run.
    Stop,
    /// No job run covered this span.
    Idle,
}

impl std::fmt::Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineState::Run => write!(f, "Run"),
            MachineState::Stop => write!(f, "Stop"),
            MachineState::Idle => write!(f, "Idle"),
        }
    }
}

/// One contiguous span of a machine state timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSegment {
    /// The state during this span.
    pub state: MachineState,
    /// Span start.
    pub start: NaiveDateTime,
    /// Span end.
    pub end: NaiveDateTime,
}

impl StateSegment {
    /// Length of the segment in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// Builds the Run/Stop/Idle segment list for one machine over the window.
///
/// Runs are processed in chronological order, clipped to the window, with
/// open intervals ending at `min(now, window.end)`. Gaps between runs (and
/// before the first or after the last) emit Idle segments; downtime events
/// inside a run split it into Run/Stop alternations. A machine with no runs
/// at all yields a single Idle segment spanning the whole window. Segments
/// are contiguous, ordered, and zero-length spans are dropped.
///
/// # Example
///
/// ```
/// use oee_engine::engine::{build_state_timeline, MachineState};
/// use oee_engine::models::ShiftWindow;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let window = ShiftWindow {
///     start: day.and_hms_opt(6, 0, 0).unwrap(),
///     end: day.and_hms_opt(14, 0, 0).unwrap(),
///     shift_date: day,
///     label: "A".to_string(),
///     key: "2026-03-10|1".to_string(),
/// };
///
/// let segments = build_state_timeline(&window, &[], day.and_hms_opt(14, 0, 0).unwrap());
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].state, MachineState::Idle);
/// ```
pub fn build_state_timeline(
    window: &ShiftWindow,
    job_runs: &[JobRunInterval],
    now: NaiveDateTime,
) -> Vec<StateSegment> {
    let effective_now = now.min(window.end);

    let mut runs: Vec<&JobRunInterval> = job_runs
        .iter()
        .filter(|r| {
            let run_end = r.end.unwrap_or(effective_now);
            r.start < window.end && run_end > window.start
        })
        .collect();
    runs.sort_by_key(|r| r.start);

    let mut segments = Vec::new();
    let mut cursor = window.start;

    for run in runs {
        let run_start = run.start.max(window.start);
        let run_end = run.end.unwrap_or(effective_now).min(window.end);
        if run_start >= run_end || run_start >= window.end {
            continue;
        }

        if cursor < run_start {
            push_segment(&mut segments, MachineState::Idle, cursor, run_start);
        }

        // Alternate Run/Stop within the run, in downtime order.
        let mut events: Vec<(NaiveDateTime, NaiveDateTime)> = run
            .downtime_events
            .iter()
            .map(|d| {
                let end = d.end.unwrap_or(effective_now).min(run_end);
                (d.start.max(run_start), end)
            })
            .filter(|(s, e)| e > s)
            .collect();
        events.sort_by_key(|(s, _)| *s);

        let mut segment_start = run_start;
        for (stop_start, stop_end) in events {
            if stop_start < segment_start {
                // Overlapping downtime records collapse into the prior stop.
                if stop_end > segment_start {
                    push_segment(&mut segments, MachineState::Stop, segment_start, stop_end);
                    segment_start = stop_end;
                }
                continue;
            }
            push_segment(&mut segments, MachineState::Run, segment_start, stop_start);
            push_segment(&mut segments, MachineState::Stop, stop_start, stop_end);
            segment_start = stop_end;
        }
        if segment_start < run_end {
            push_segment(&mut segments, MachineState::Run, segment_start, run_end);
        }

        cursor = cursor.max(run_end);
    }

    if cursor < window.end {
        push_segment(&mut segments, MachineState::Idle, cursor, window.end);
    }

    if segments.is_empty() && window.end > window.start {
        segments.push(StateSegment {
            state: MachineState::Idle,
            start: window.start,
            end: window.end,
        });
    }

    segments
}

fn push_segment(
    segments: &mut Vec<StateSegment>,
    state: MachineState,
    start: NaiveDateTime,
    end: NaiveDateTime,
) {
    if end > start {
        segments.push(StateSegment { state, start, end });
    }
}
