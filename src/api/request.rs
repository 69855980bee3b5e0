//! Request types for the Gratuity Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculation::parse_amount;
use crate::error::EngineResult;
use crate::models::ContractType;

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional so that a partially-filled form can be submitted;
/// the engine decides whether the inputs are complete. Amount fields accept
/// JSON numbers or numeric text. Blank or unparseable values count as missing,
/// the same as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Basic monthly salary.
    #[serde(default)]
    pub basic_salary: Option<Value>,
    /// Years of service.
    #[serde(default)]
    pub years_of_service: Option<Value>,
    /// Contract type selector value (`"unlimited"` or `"limited"`).
    #[serde(default)]
    pub contract_type: Option<String>,
}

/// Reads an amount from a JSON number or numeric string.
fn amount_from_value(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(number) => parse_amount(&number.to_string()),
        Value::String(text) => parse_amount(text),
        _ => None,
    }
}

impl CalculationRequest {
    /// Returns the basic salary, or `None` when it is absent or unparseable.
    pub fn parsed_basic_salary(&self) -> Option<Decimal> {
        amount_from_value(self.basic_salary.as_ref())
    }

    /// Returns the years of service, or `None` when absent or unparseable.
    pub fn parsed_years_of_service(&self) -> Option<Decimal> {
        amount_from_value(self.years_of_service.as_ref())
    }

    /// Parses the contract type selector value.
    ///
    /// An absent or blank value is treated as not selected. Any other value
    /// must name a known contract type.
    pub fn parsed_contract_type(&self) -> EngineResult<Option<ContractType>> {
        match self.contract_type.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}
