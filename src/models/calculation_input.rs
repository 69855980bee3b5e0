//! Calculation input model.
//!
//! A [`CalculationInput`] can only be built from a complete set of inputs.
//! "Complete" follows the form's truthiness rule: a value is missing when it
//! is absent or zero. Negative values are accepted unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ContractType;

/// A complete, validated set of gratuity inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Basic monthly salary in currency units.
    pub basic_salary: Decimal,
    /// Years of service; fractional years are permitted.
    pub years_of_service: Decimal,
    /// The contract type.
    pub contract_type: ContractType,
}

impl CalculationInput {
    /// Builds an input from possibly-missing parts.
    ///
    /// Returns [`EngineError::IncompleteInput`] naming every missing field
    /// when any part is absent or zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gratuity_engine::models::{CalculationInput, ContractType};
    /// use rust_decimal::Decimal;
    ///
    /// let input = CalculationInput::from_parts(
    ///     Some(Decimal::from(9000)),
    ///     Some(Decimal::from(3)),
    ///     Some(ContractType::Unlimited),
    /// );
    /// assert!(input.is_ok());
    ///
    /// let missing = CalculationInput::from_parts(
    ///     Some(Decimal::ZERO),
    ///     Some(Decimal::from(3)),
    ///     None,
    /// );
    /// assert!(missing.is_err());
    /// ```
    pub fn from_parts(
        basic_salary: Option<Decimal>,
        years_of_service: Option<Decimal>,
        contract_type: Option<ContractType>,
    ) -> EngineResult<Self> {
        let basic_salary = basic_salary.filter(|v| !v.is_zero());
        let years_of_service = years_of_service.filter(|v| !v.is_zero());

        match (basic_salary, years_of_service, contract_type) {
            (Some(basic_salary), Some(years_of_service), Some(contract_type)) => Ok(Self {
                basic_salary,
                years_of_service,
                contract_type,
            }),
            (salary, years, contract) => {
                let mut fields = Vec::new();
                if salary.is_none() {
                    fields.push("basic_salary".to_string());
                }
                if years.is_none() {
                    fields.push("years_of_service".to_string());
                }
                if contract.is_none() {
                    fields.push("contract_type".to_string());
                }
                Err(EngineError::IncompleteInput { fields })
            }
        }
    }
}
