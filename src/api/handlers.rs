//! HTTP request handlers for the Gratuity Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::models::CalculationInput;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, RulesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated gratuity, or
/// `422 INCOMPLETE_INPUT` when the engine produces no result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing gratuity request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let contract_type = match request.parsed_contract_type() {
        Ok(contract_type) => contract_type,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected contract type"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let input = match CalculationInput::from_parts(
        request.parsed_basic_salary(),
        request.parsed_years_of_service(),
        contract_type,
    ) {
        Ok(input) => input,
        Err(err) => {
            info!(
                correlation_id = %correlation_id,
                reason = %err,
                "No gratuity calculated"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = compute(&input, state.rules());
    let duration = start_time.elapsed();

    for warning in &result.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
    info!(
        correlation_id = %correlation_id,
        contract_type = %input.contract_type,
        years_of_service = %input.years_of_service,
        gratuity = %result.gratuity,
        duration_us = duration.as_micros(),
        "Gratuity calculated successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse::new(correlation_id, result),
    )
}

/// Handler for GET /rules endpoint.
///
/// Returns the regulation metadata and accrual constants in use.
async fn rules_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        RulesResponse {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            rules: state.rules().clone(),
        },
    )
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
