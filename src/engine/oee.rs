//! The OEE percentage calculator.
//!
//! A pure function from accumulated quantities to the four standard OEE
//! percentages:
//!
//! - Availability = (Loading Time − Down Time) / Loading Time × 100
//! - Performance = (Standard Cycle Time × Output) / Operating Time × 100
//! - Quality = Good Count / Total Count × 100
//! - OEE = Availability × Performance × Quality

use rust_decimal::Decimal;

use crate::models::OeeResult;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Calculates the four OEE percentages from accumulated quantities.
///
/// `loading_seconds` is the full reporting window length; `down_seconds` is
/// the downtime charged against Availability. Each percentage is clamped to
/// `[0, 100]` and degenerate inputs (zero loading time, zero output, zero
/// operating time) yield `0` rather than an error — a dashboard's "no data
/// yet" state renders zeros. All four outputs are rounded to 2 decimal
/// places; inputs are taken at full precision.
///
/// Caller contract: when the standard cycle time is unknown or non-positive,
/// substitute `1` *before* calling so Performance degrades to a near-zero
/// signal instead of dividing by zero. The substitution deliberately lives
/// at the call site, where "unknown cycle time" is distinguishable from a
/// configured value.
///
/// # Example
///
/// ```
/// use oee_engine::engine::calculate_oee;
/// use rust_decimal::Decimal;
///
/// // 8 h shift, 1 h down, 500 units at a 30 s cycle, 480 good.
/// let result = calculate_oee(28_800, 3_600, 500, 480, Decimal::new(30, 0));
/// assert_eq!(result.availability, Decimal::new(8750, 2));
/// assert_eq!(result.performance, Decimal::new(5952, 2));
/// assert_eq!(result.quality, Decimal::new(9600, 2));
/// assert_eq!(result.oee, Decimal::new(5000, 2));
/// ```
pub fn calculate_oee(
    loading_seconds: i64,
    down_seconds: i64,
    total_count: i64,
    good_count: i64,
    standard_cycle_seconds: Decimal,
) -> OeeResult {
    let loading = Decimal::from(loading_seconds);
    let down = Decimal::from(down_seconds);

    let operating = (loading - down).max(Decimal::ZERO);

    let availability = if loading <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        ((loading - down) / loading * HUNDRED).min(HUNDRED)
    };

    let performance = if operating <= Decimal::ZERO || standard_cycle_seconds <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (standard_cycle_seconds * Decimal::from(total_count) / operating * HUNDRED).min(HUNDRED)
    };

    let quality = if total_count <= 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(good_count) / Decimal::from(total_count) * HUNDRED).min(HUNDRED)
    };

    let oee = availability / HUNDRED * (performance / HUNDRED) * (quality / HUNDRED) * HUNDRED;

    OeeResult {
        availability: availability.round_dp(2),
        performance: performance.round_dp(2),
        quality: quality.round_dp(2),
        oee: oee.round_dp(2),
    }
}
