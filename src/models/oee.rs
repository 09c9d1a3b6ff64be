//! OEE output models.
//!
//! [`OeeResult`] carries the four display percentages; [`OeeQuantities`]
//! carries the raw accumulated amounts behind them for drill-down views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four standard OEE percentages.
///
/// Each field is a percentage in `[0, 100]`, rounded to two decimal places
/// at the calculator boundary. `oee` is the product of the other three
/// (scaled back to a percentage) and therefore stays in range when they do.
///
/// # Example
///
/// ```
/// use oee_engine::models::OeeResult;
/// use rust_decimal::Decimal;
///
/// let result = OeeResult {
///     availability: Decimal::new(8750, 2),
///     performance: Decimal::new(5952, 2),
///     quality: Decimal::new(9600, 2),
///     oee: Decimal::new(5000, 2),
/// };
/// assert_eq!(result.oee.to_string(), "50.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OeeResult {
    /// Availability: share of loading time the machine was not down.
    pub availability: Decimal,
    /// Performance: actual output versus ideal output over operating time.
    pub performance: Decimal,
    /// Quality: share of produced units that were good.
    pub quality: Decimal,
    /// Overall Equipment Effectiveness, the product of the other three.
    pub oee: Decimal,
}

/// Raw accumulated quantities behind an OEE result.
///
/// Retains full precision; rounding happens only when the calculator
/// produces the display percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OeeQuantities {
    /// Length of the reporting window in seconds (Loading Time).
    pub loading_seconds: i64,
    /// Run time net of unplanned downtime, clipped to the window.
    pub operating_seconds: i64,
    /// Seconds of planned downtime (setup, scheduled breaks) in the window.
    pub planned_downtime_seconds: i64,
    /// Seconds of unplanned downtime (failures, shortages) in the window.
    pub unplanned_downtime_seconds: i64,
    /// Total units produced in the window (good plus reject).
    pub total_count: i64,
    /// Good units produced in the window.
    pub good_count: i64,
    /// Rejected units produced in the window.
    pub reject_count: i64,
    /// Average standard cycle time across machines with a positive value,
    /// in seconds; zero when no machine reported one.
    pub avg_standard_cycle_seconds: Decimal,
}
