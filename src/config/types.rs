//! Shift catalog configuration types.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftDefinition;

/// The validated set of shift definitions for a plant.
///
/// Wraps the raw definition list so that invalid catalogs (zero-length
/// shifts, duplicate ids) are rejected once at the configuration boundary
/// instead of surfacing as confusing resolver output later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct ShiftCatalog {
    shifts: Vec<ShiftDefinition>,
}

/// Raw file shape: a `shifts:` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    shifts: Vec<ShiftDefinition>,
}

impl TryFrom<CatalogFile> for ShiftCatalog {
    type Error = EngineError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        ShiftCatalog::new(file.shifts)
    }
}

impl ShiftCatalog {
    /// Validates and wraps a list of shift definitions.
    ///
    /// An empty catalog is valid — the resolver substitutes its default
    /// window. Zero-length shifts (equal start and end times) and duplicate
    /// ids are rejected.
    pub fn new(shifts: Vec<ShiftDefinition>) -> EngineResult<Self> {
        for shift in &shifts {
            if shift.start_time == shift.end_time {
                return Err(EngineError::InvalidCatalog {
                    message: format!("shift '{}' has zero length", shift.name),
                });
            }
        }
        for (i, shift) in shifts.iter().enumerate() {
            if shifts[..i].iter().any(|other| other.id == shift.id) {
                return Err(EngineError::InvalidCatalog {
                    message: format!("duplicate shift id {}", shift.id),
                });
            }
        }
        Ok(Self { shifts })
    }

    /// The standard three-shift pattern: A 06:00–14:00, B 14:00–22:00,
    /// C 22:00–06:00.
    ///
    /// Offered as an explicit constructor for plants without their own
    /// catalog file; the resolver never assumes it.
    pub fn standard_three_shift() -> Self {
        let time = |h| NaiveTime::from_hms_opt(h, 0, 0).expect("valid time");
        Self {
            shifts: vec![
                ShiftDefinition {
                    id: 1,
                    name: "A".to_string(),
                    start_time: time(6),
                    end_time: time(14),
                },
                ShiftDefinition {
                    id: 2,
                    name: "B".to_string(),
                    start_time: time(14),
                    end_time: time(22),
                },
                ShiftDefinition {
                    id: 3,
                    name: "C".to_string(),
                    start_time: time(22),
                    end_time: time(6),
                },
            ],
        }
    }

    /// The shift definitions, in catalog order.
    pub fn shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }
}
