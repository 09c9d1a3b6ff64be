//! HTTP request handlers for the OEE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ShiftCatalog;
use crate::engine::{
    accumulate, aggregate, build_state_timeline, calculate_oee, find_active_run,
    resolve_shift_window, resolve_status,
};
use crate::error::EngineResult;
use crate::models::{MachineSnapshot, OeeQuantities};

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, MachineReport, OeeReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a machine snapshot plus shift selection and returns the shift
/// OEE report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match build_report(&state, request) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                shift_key = %report.shift_window.key,
                machines = report.machines.len(),
                oee = %report.oee.oee,
                duration_us = duration.as_micros(),
                "Report completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Assembles the OEE report for a snapshot request.
///
/// Pure apart from the catalog lookup: the engine only sees the request's
/// `now`, so identical requests produce identical reports. A request-level
/// catalog override is validated here and rejected before any computation.
fn build_report(state: &AppState, request: ReportRequest) -> EngineResult<OeeReport> {
    let now = request.now;

    let override_catalog = match request.shifts {
        Some(defs) => Some(ShiftCatalog::new(defs.into_iter().map(Into::into).collect())?),
        None => None,
    };
    let shifts = override_catalog
        .as_ref()
        .map_or_else(|| state.config().catalog().shifts(), ShiftCatalog::shifts);

    let window = resolve_shift_window(now, shifts, request.shift_id, request.shift_date);

    let machines: Vec<MachineSnapshot> =
        request.machines.into_iter().map(Into::into).collect();

    let mut machine_reports = Vec::with_capacity(machines.len());
    let mut accumulations = Vec::with_capacity(machines.len());

    for machine in &machines {
        accumulations.push(accumulate(&window, &machine.job_runs, now));
        machine_reports.push(MachineReport {
            id: machine.id.clone(),
            name: machine.name.clone(),
            status: resolve_status(find_active_run(&machine.job_runs)),
            timeline: build_state_timeline(&window, &machine.job_runs, now),
        });
    }

    let totals = aggregate(accumulations);
    let loading_seconds = window.loading_seconds();

    // Caller-side substitution: an unknown cycle time becomes 1 so that
    // performance degrades to a near-zero signal instead of dividing by zero.
    let cycle = if totals.avg_standard_cycle_seconds <= Decimal::ZERO {
        Decimal::ONE
    } else {
        totals.avg_standard_cycle_seconds
    };

    let oee = calculate_oee(
        loading_seconds,
        totals.unplanned_downtime_seconds,
        totals.total_count,
        totals.good_count,
        cycle,
    );

    Ok(OeeReport {
        shift_window: window,
        oee,
        quantities: OeeQuantities {
            loading_seconds,
            operating_seconds: totals.operating_seconds,
            planned_downtime_seconds: totals.planned_downtime_seconds,
            unplanned_downtime_seconds: totals.unplanned_downtime_seconds,
            total_count: totals.total_count,
            good_count: totals.good_count,
            reject_count: totals.reject_count,
            avg_standard_cycle_seconds: totals.avg_standard_cycle_seconds,
        },
        machines: machine_reports,
    })
}
