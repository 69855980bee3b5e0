//! Core data models for the Gratuity Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod contract_type;

pub use calculation_input::CalculationInput;
pub use calculation_result::{
    AccrualLine, AccrualTier, AuditStep, AuditTrace, AuditWarning, CalculationResult,
};
pub use contract_type::ContractType;
