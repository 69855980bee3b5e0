//! HTTP API module for the Gratuity Engine.
//!
//! This module provides the REST API endpoints for calculating
//! end-of-service gratuity.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, RulesResponse};
pub use state::AppState;
