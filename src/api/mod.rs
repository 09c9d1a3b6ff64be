//! HTTP API module for the OEE engine.
//!
//! This module provides the REST endpoint that turns a machine snapshot
//! into a shift OEE report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, MachineReport, OeeReport};
pub use state::AppState;
