//! Downtime classification.
//!
//! Partitions downtime events into Planned and Unplanned per the reason
//! taxonomy. Only unplanned downtime counts against Availability.

use serde::{Deserialize, Serialize};

use crate::models::DowntimeEvent;

/// The reason-category literal that marks a stoppage as unplanned.
///
/// Compared case-sensitively: `"unplanned"` or `"UNPLANNED"` do not match.
pub const UNPLANNED_CATEGORY: &str = "Unplanned";

/// Whether a stoppage was scheduled or not.
///
/// Planned downtime (setup, scheduled rest breaks) does not reduce
/// Operating Time in this system's OEE variant; unplanned downtime does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DowntimeCategory {
    /// Scheduled stoppage: setup, changeover, rest break.
    Planned,
    /// Unscheduled stoppage: failure, material shortage.
    Unplanned,
}

impl std::fmt::Display for DowntimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DowntimeCategory::Planned => write!(f, "Planned"),
            DowntimeCategory::Unplanned => write!(f, "Unplanned"),
        }
    }
}

/// Classifies a downtime event by its reason category.
///
/// Only the exact string [`UNPLANNED_CATEGORY`] classifies as
/// [`DowntimeCategory::Unplanned`]; every other value, including an absent
/// reason, classifies as [`DowntimeCategory::Planned`]. Unknown reasons
/// therefore never penalize Availability — a business rule, not an accident.
///
/// # Example
///
/// ```
/// use oee_engine::engine::{classify, DowntimeCategory};
/// use oee_engine::models::DowntimeEvent;
/// use chrono::NaiveDate;
///
/// let event = DowntimeEvent {
///     start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(8, 0, 0).unwrap(),
///     end: None,
///     reason_category: Some("Unplanned".to_string()),
/// };
/// assert_eq!(classify(&event), DowntimeCategory::Unplanned);
/// ```
pub fn classify(event: &DowntimeEvent) -> DowntimeCategory {
    match event.reason_category.as_deref() {
        Some(UNPLANNED_CATEGORY) => DowntimeCategory::Unplanned,
        _ => DowntimeCategory::Planned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn event(reason: Option<&str>) -> DowntimeEvent {
        DowntimeEvent {
            start: make_dt(8, 0),
            end: Some(make_dt(8, 30)),
            reason_category: reason.map(str::to_string),
        }
    }

    fn make_dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // ==========================================================================
    // DC-001: exact literal classifies as Unplanned
    // ==========================================================================
    #[test]
    fn test_dc_001_unplanned_literal() {
        assert_eq!(classify(&event(Some("Unplanned"))), DowntimeCategory::Unplanned);
    }

    // ==========================================================================
    // DC-002: any other category is Planned
    // ==========================================================================
    #[test]
    fn test_dc_002_other_categories_are_planned() {
        assert_eq!(classify(&event(Some("Planned"))), DowntimeCategory::Planned);
        assert_eq!(classify(&event(Some("Setup"))), DowntimeCategory::Planned);
        assert_eq!(classify(&event(Some("Rest Break"))), DowntimeCategory::Planned);
    }

    // ==========================================================================
    // DC-003: missing reason defaults to Planned
    // ==========================================================================
    #[test]
    fn test_dc_003_missing_reason_is_planned() {
        assert_eq!(classify(&event(None)), DowntimeCategory::Planned);
    }

    // ==========================================================================
    // DC-004: comparison is case-sensitive
    // ==========================================================================
    #[test]
    fn test_dc_004_case_sensitive() {
        assert_eq!(classify(&event(Some("unplanned"))), DowntimeCategory::Planned);
        assert_eq!(classify(&event(Some("UNPLANNED"))), DowntimeCategory::Planned);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", DowntimeCategory::Planned), "Planned");
        assert_eq!(format!("{}", DowntimeCategory::Unplanned), "Unplanned");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&DowntimeCategory::Unplanned).unwrap();
        assert_eq!(json, "\"unplanned\"");
        let back: DowntimeCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DowntimeCategory::Unplanned);
    }
}
