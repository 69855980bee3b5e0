//! Response types for the Gratuity Engine API.
//!
//! This module defines the success envelope, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GratuityRules;
use crate::error::EngineError;
use crate::models::CalculationResult;

/// Successful response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Display label for the contract type (e.g., "Limited Contract").
    pub contract_label: String,
    /// Plain-language description of how the gratuity accrued.
    pub calculation_method: String,
    /// The calculation result.
    pub result: CalculationResult,
}

impl CalculationResponse {
    /// Wraps a result with a fresh identifier and timestamp.
    pub fn new(calculation_id: Uuid, result: CalculationResult) -> Self {
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            contract_label: result.contract_type.label().to_string(),
            calculation_method: result.contract_type.calculation_method().to_string(),
            result,
        }
    }
}

/// Response body for the `/rules` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    /// The version of the engine serving the rules.
    pub engine_version: String,
    /// The loaded rules.
    pub rules: GratuityRules,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an incomplete input error response.
    pub fn incomplete_input(fields: &[String]) -> Self {
        Self::with_details(
            "INCOMPLETE_INPUT",
            format!("Incomplete input: missing {}", fields.join(", ")),
            "Basic salary and years of service must be non-zero numbers and a contract type must be selected",
        )
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
            EngineError::InvalidRules { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid accrual rules",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::InvalidContractType { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Unknown contract type: {}", value),
                    "contract_type must be one of: unlimited, limited",
                ),
            },
            EngineError::IncompleteInput { fields } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::incomplete_input(&fields),
            },
        }
    }
}
