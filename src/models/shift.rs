//! Shift definitions and resolved shift windows.
//!
//! A [`ShiftDefinition`] is reference data: a named time-of-day range that
//! may wrap past midnight. A [`ShiftWindow`] is one concrete occurrence of a
//! shift on the calendar, produced by the resolver from a definition plus a
//! reference instant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A production shift as configured in the shift catalog.
///
/// `end_time < start_time` denotes a shift that spans midnight
/// (e.g. 22:00–06:00). Definitions are immutable reference data; the
/// resolver receives the full catalog and a selector.
///
/// # Example
///
/// ```
/// use oee_engine::models::ShiftDefinition;
/// use chrono::NaiveTime;
///
/// let night = ShiftDefinition {
///     id: 3,
///     name: "C".to_string(),
///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// };
/// assert!(night.spans_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Unique identifier for the shift.
    pub id: u32,
    /// Display name of the shift (e.g. "A", "Night").
    pub name: String,
    /// Wall-clock time the shift starts.
    pub start_time: NaiveTime,
    /// Wall-clock time the shift ends.
    pub end_time: NaiveTime,
}

impl ShiftDefinition {
    /// Returns true when the shift runs past midnight into the next day.
    pub fn spans_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Returns true when `time_of_day` falls within the shift's daily range.
    ///
    /// Boundary semantics are half-open: the start instant belongs to the
    /// shift, the end instant does not. For an overnight shift the range
    /// wraps, so 23:00 and 02:00 both match a 22:00–06:00 shift.
    pub fn contains_time_of_day(&self, time_of_day: NaiveTime) -> bool {
        if self.spans_midnight() {
            time_of_day >= self.start_time || time_of_day < self.end_time
        } else {
            time_of_day >= self.start_time && time_of_day < self.end_time
        }
    }
}

/// One concrete occurrence of a shift on the calendar.
///
/// Derived by the resolver, never persisted. `end > start` always holds;
/// `key` uniquely identifies the occurrence (shift date plus shift id) so
/// repeated reports over the same occurrence are idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Start of the reporting window.
    pub start: NaiveDateTime,
    /// End of the reporting window (exclusive).
    pub end: NaiveDateTime,
    /// The calendar date this occurrence is attributed to. For an overnight
    /// shift this is the date the shift started, not the date it ended.
    pub shift_date: NaiveDate,
    /// Display label, taken from the shift definition's name.
    pub label: String,
    /// Idempotency key: `"{shift_date}|{shift_id}"`.
    pub key: String,
}

impl ShiftWindow {
    /// Returns the window length in whole seconds (the Loading Time).
    pub fn loading_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}
