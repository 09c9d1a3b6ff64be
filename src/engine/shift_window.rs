//! Shift-window resolution.
//!
//! Given a reference instant, the shift catalog, and an optional explicit
//! selection, determines the concrete `[start, end)` calendar window the
//! report covers. Handles shifts that cross midnight, the today-vs-yesterday
//! occurrence choice, and clipping the live window so it never extends into
//! the future.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{ShiftDefinition, ShiftWindow};

/// Start of the hard-coded fallback window used when the catalog is empty (06:00).
pub const DEFAULT_SHIFT_START: NaiveTime = match NaiveTime::from_hms_opt(6, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// End of the hard-coded fallback window used when the catalog is empty (14:00).
pub const DEFAULT_SHIFT_END: NaiveTime = match NaiveTime::from_hms_opt(14, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Name of the hard-coded fallback shift.
pub const DEFAULT_SHIFT_NAME: &str = "A";

/// Resolves the concrete shift window to report on.
///
/// Selection rules:
///
/// - With `explicit_shift_id` matching a catalog entry, that shift is used.
///   An id with no catalog match falls through to auto-detection, exactly as
///   if no id had been given.
/// - Otherwise the first catalog shift whose daily `[start, end)` range
///   (wrapped over midnight where applicable) contains `now`'s time of day
///   wins; when none matches, the first defined shift is used; when the
///   catalog is empty, a default 06:00–14:00 shift named
///   [`DEFAULT_SHIFT_NAME`] with id 0 stands in.
///
/// Occurrence rules:
///
/// - `explicit_date` pins the occurrence to that date directly, bypassing
///   the today/yesterday inference, and the full window is returned even if
///   it ends in the future.
/// - An explicitly selected shift reports the occurrence whose window
///   contains `now`; before today's start, and equally after today's end,
///   yesterday's full occurrence is shown — a completed or in-progress past
///   period, never a forecast of today's not-yet-started window.
/// - An auto-detected shift reports today's occurrence clipped so `end`
///   never exceeds `now`; when `now` is at or before today's start (routine
///   for overnight shifts in the early morning) the occurrence rolls back a
///   day first. The rollback condition is `now <= start` so that clipping
///   can never produce an empty window: `end > start` holds for every input
///   given a catalog of nonzero-length shifts.
///
/// # Example
///
/// ```
/// use oee_engine::engine::resolve_shift_window;
/// use oee_engine::models::ShiftDefinition;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shifts = vec![ShiftDefinition {
///     id: 3,
///     name: "C".to_string(),
///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// }];
///
/// // 02:00 during the night shift: the occurrence started yesterday.
/// let now = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap().and_hms_opt(2, 0, 0).unwrap();
/// let window = resolve_shift_window(now, &shifts, None, None);
/// assert_eq!(window.shift_date, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
/// assert_eq!(window.end, now);
/// ```
pub fn resolve_shift_window(
    now: NaiveDateTime,
    shifts: &[ShiftDefinition],
    explicit_shift_id: Option<u32>,
    explicit_date: Option<NaiveDate>,
) -> ShiftWindow {
    let selected = explicit_shift_id.and_then(|id| shifts.iter().find(|s| s.id == id));
    let explicitly_selected = selected.is_some();

    let default_shift = ShiftDefinition {
        id: 0,
        name: DEFAULT_SHIFT_NAME.to_string(),
        start_time: DEFAULT_SHIFT_START,
        end_time: DEFAULT_SHIFT_END,
    };
    let shift = selected
        .or_else(|| detect_current_shift(now.time(), shifts))
        .or_else(|| shifts.first())
        .unwrap_or(&default_shift);

    let today = now.date();

    let (base_date, end) = if let Some(date) = explicit_date {
        // Pinned occurrence: full historical window, no inference.
        let (_, end) = occurrence(shift, date);
        (date, end)
    } else if explicitly_selected {
        let (start_today, end_today) = occurrence(shift, today);
        if now >= start_today && now < end_today {
            (today, end_today)
        } else {
            // Before today's start or past today's end: yesterday's full
            // occurrence, never today's not-yet-started window.
            let yesterday = prev_day(today);
            let (_, end_yesterday) = occurrence(shift, yesterday);
            (yesterday, end_yesterday)
        }
    } else {
        let (start_today, end_today) = occurrence(shift, today);
        let (base_date, end) = if now <= start_today {
            let yesterday = prev_day(today);
            let (_, end_yesterday) = occurrence(shift, yesterday);
            (yesterday, end_yesterday)
        } else {
            (today, end_today)
        };
        // The live window never extends into the future.
        (base_date, end.min(now))
    };

    let (start, _) = occurrence(shift, base_date);

    ShiftWindow {
        start,
        end,
        shift_date: base_date,
        label: shift.name.clone(),
        key: format!("{}|{}", base_date.format("%Y-%m-%d"), shift.id),
    }
}

/// Finds the first catalog shift whose daily range contains `time_of_day`.
///
/// Catalog order breaks ties: when two shifts cover the same time of day the
/// earlier entry wins. The boundary instant belongs to the shift that starts
/// there, not the one ending there.
fn detect_current_shift(
    time_of_day: NaiveTime,
    shifts: &[ShiftDefinition],
) -> Option<&ShiftDefinition> {
    shifts.iter().find(|s| s.contains_time_of_day(time_of_day))
}

/// Computes the `[start, end)` window of `shift`'s occurrence on `base_date`.
fn occurrence(shift: &ShiftDefinition, base_date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = base_date.and_time(shift.start_time);
    let end = if shift.spans_midnight() {
        next_day(base_date).and_time(shift.end_time)
    } else {
        base_date.and_time(shift.end_time)
    };
    (start, end)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).expect("date in range")
}

fn prev_day(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).expect("date in range")
}
