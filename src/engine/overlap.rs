//! Interval overlap arithmetic.
//!
//! Every higher-level aggregation in the engine clips intervals against the
//! shift window with this one primitive.

use chrono::{Duration, NaiveDateTime};

/// Computes the overlap between the intervals `[a_start, a_end)` and
/// `[b_start, b_end)`.
///
/// Defined as `max(0, min(a_end, b_end) - max(a_start, b_start))`: disjoint
/// or degenerate inputs produce a zero duration, never a negative one.
///
/// # Example
///
/// ```
/// use oee_engine::engine::overlap;
/// use chrono::{NaiveDate, Duration};
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let overlap = overlap(
///     day.and_hms_opt(6, 0, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(14, 0, 0).unwrap(),
/// );
/// assert_eq!(overlap, Duration::hours(2));
/// ```
pub fn overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> Duration {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end > start {
        end - start
    } else {
        Duration::zero()
    }
}

/// Like [`overlap`], returning whole seconds.
pub fn overlap_seconds(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> i64 {
    overlap(a_start, a_end, b_start, b_end).num_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // ==========================================================================
    // OV-001: partial overlap
    // ==========================================================================
    #[test]
    fn test_ov_001_partial_overlap() {
        assert_eq!(
            overlap(dt(6, 0), dt(10, 0), dt(8, 0), dt(14, 0)),
            Duration::hours(2)
        );
    }

    // ==========================================================================
    // OV-002: disjoint intervals overlap zero
    // ==========================================================================
    #[test]
    fn test_ov_002_disjoint_is_zero() {
        assert_eq!(
            overlap(dt(6, 0), dt(8, 0), dt(9, 0), dt(11, 0)),
            Duration::zero()
        );
    }

    // ==========================================================================
    // OV-003: touching endpoints overlap zero (half-open semantics)
    // ==========================================================================
    #[test]
    fn test_ov_003_touching_is_zero() {
        assert_eq!(
            overlap(dt(6, 0), dt(8, 0), dt(8, 0), dt(11, 0)),
            Duration::zero()
        );
    }

    // ==========================================================================
    // OV-004: containment returns the inner interval's length
    // ==========================================================================
    #[test]
    fn test_ov_004_containment() {
        assert_eq!(
            overlap(dt(6, 0), dt(14, 0), dt(8, 0), dt(9, 30)),
            Duration::minutes(90)
        );
    }

    // ==========================================================================
    // OV-005: inverted input yields zero, not negative
    // ==========================================================================
    #[test]
    fn test_ov_005_inverted_input_is_zero() {
        assert_eq!(
            overlap(dt(10, 0), dt(6, 0), dt(6, 0), dt(14, 0)),
            Duration::zero()
        );
    }

    #[test]
    fn test_overlap_seconds() {
        assert_eq!(overlap_seconds(dt(6, 0), dt(7, 0), dt(6, 30), dt(9, 0)), 1800);
    }

    proptest! {
        // overlap is symmetric in its two intervals
        #[test]
        fn prop_overlap_symmetric(a in 0i64..86_400, b in 0i64..86_400, c in 0i64..86_400, d in 0i64..86_400) {
            let base = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let (a, b, c, d) = (
                base + Duration::seconds(a),
                base + Duration::seconds(b),
                base + Duration::seconds(c),
                base + Duration::seconds(d),
            );
            prop_assert_eq!(overlap(a, b, c, d), overlap(c, d, a, b));
        }

        // overlap never exceeds either interval's own length, and never goes negative
        #[test]
        fn prop_overlap_bounded(a in 0i64..86_400, len_a in 0i64..86_400, c in 0i64..86_400, len_b in 0i64..86_400) {
            let base = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let a_start = base + Duration::seconds(a);
            let a_end = a_start + Duration::seconds(len_a);
            let b_start = base + Duration::seconds(c);
            let b_end = b_start + Duration::seconds(len_b);
            let result = overlap_seconds(a_start, a_end, b_start, b_end);
            prop_assert!(result >= 0);
            prop_assert!(result <= len_a);
            prop_assert!(result <= len_b);
        }
    }
}
