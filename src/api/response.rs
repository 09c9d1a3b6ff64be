//! Response types for the OEE engine API.
//!
//! This module defines the report payload returned by `/report` plus the
//! error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::engine::{MachineStatus, StateSegment};
use crate::error::EngineError;
use crate::models::{OeeQuantities, OeeResult, ShiftWindow};

/// The report payload for one shift window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OeeReport {
    /// The resolved window the report covers.
    pub shift_window: ShiftWindow,
    /// The four OEE percentages, aggregated across the requested machines.
    pub oee: OeeResult,
    /// Raw accumulated quantities for drill-down display.
    pub quantities: OeeQuantities,
    /// Per-machine status and state timeline.
    pub machines: Vec<MachineReport>,
}

/// Per-machine section of an [`OeeReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineReport {
    /// Unique machine identifier.
    pub id: String,
    /// Display name of the machine.
    pub name: String,
    /// Live status badge value.
    pub status: MachineStatus,
    /// Run/Stop/Idle segments over the shift window.
    pub timeline: Vec<StateSegment>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidCatalog { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CATALOG",
                    "Invalid shift catalog",
                    message,
                ),
            },
        }
    }
}
