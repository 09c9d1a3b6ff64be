//! Computation core of the OEE engine.
//!
//! This module contains the shift-window resolver, the interval-overlap
//! utility, the downtime classifier, the per-shift accumulator, the OEE
//! calculator, the machine status resolver, and the Run/Stop/Idle state
//! timeline builder. Everything here is a pure function of its inputs plus
//! the caller-supplied reference instant; no global clock is consulted, so
//! fixed inputs always produce identical output.

mod accumulator;
mod downtime;
mod oee;
mod overlap;
mod shift_window;
mod status;
mod timeline;

pub use accumulator::{MachineAccumulation, ShiftAccumulation, accumulate, aggregate};
pub use downtime::{DowntimeCategory, UNPLANNED_CATEGORY, classify};
pub use oee::calculate_oee;
pub use overlap::{overlap, overlap_seconds};
pub use shift_window::{
    DEFAULT_SHIFT_END, DEFAULT_SHIFT_NAME, DEFAULT_SHIFT_START, resolve_shift_window,
};
pub use status::{MachineStatus, find_active_run, resolve_status};
pub use timeline::{MachineState, StateSegment, build_state_timeline};
