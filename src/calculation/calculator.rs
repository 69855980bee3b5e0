//! Caller-owned calculator state.
//!
//! [`GratuityCalculator`] holds what an interactive form holds: the raw text
//! typed into the salary and years fields, the selected contract type, and
//! the last result. The engine functions stay pure; this type owns the only
//! mutable slot.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::GratuityRules;
use crate::models::{CalculationResult, ContractType};

use super::gratuity::calculate_gratuity;

/// Parses user-entered numeric text.
///
/// Accepts plain decimals (`"9000"`, `"2.5"`) and scientific notation
/// (`"9e3"`). Empty or unparseable text yields `None`, which the engine
/// treats the same as a missing value. Digit separators such as `"1_000"`
/// or `"1,000"` are rejected.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 9000 "), Some(Decimal::from(9000)));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.contains(['_', ',']) {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Form state for a gratuity calculation.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::GratuityCalculator;
/// use gratuity_engine::config::GratuityRules;
/// use gratuity_engine::models::ContractType;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::default();
/// let mut calculator = GratuityCalculator::new();
/// calculator.set_basic_salary("9000");
/// calculator.set_years_of_service("3");
/// calculator.set_contract_type(Some(ContractType::Unlimited));
///
/// calculator.calculate(&rules);
/// assert_eq!(calculator.result().unwrap().gratuity, Decimal::from(18900));
///
/// calculator.reset();
/// assert!(calculator.result().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GratuityCalculator {
    basic_salary: String,
    years_of_service: String,
    contract_type: Option<ContractType>,
    result: Option<CalculationResult>,
}

impl GratuityCalculator {
    /// Creates an empty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw basic salary text.
    pub fn set_basic_salary(&mut self, text: impl Into<String>) {
        self.basic_salary = text.into();
    }

    /// Sets the raw years of service text.
    pub fn set_years_of_service(&mut self, text: impl Into<String>) {
        self.years_of_service = text.into();
    }

    /// Sets or clears the selected contract type.
    pub fn set_contract_type(&mut self, contract_type: Option<ContractType>) {
        self.contract_type = contract_type;
    }

    /// Returns the raw basic salary text.
    pub fn basic_salary(&self) -> &str {
        &self.basic_salary
    }

    /// Returns the raw years of service text.
    pub fn years_of_service(&self) -> &str {
        &self.years_of_service
    }

    /// Returns the selected contract type.
    pub fn contract_type(&self) -> Option<ContractType> {
        self.contract_type
    }

    /// Returns the last calculated result.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Returns true when every field has been filled in.
    ///
    /// This only checks for empty fields; text that parses to zero or not at
    /// all still enables the form but produces no result.
    pub fn can_calculate(&self) -> bool {
        !self.basic_salary.is_empty()
            && !self.years_of_service.is_empty()
            && self.contract_type.is_some()
    }

    /// Runs the calculation over the current inputs.
    ///
    /// On success the previous result is replaced and the new one returned.
    /// When the inputs are incomplete nothing changes and `None` is returned;
    /// any earlier result stays available through [`result`](Self::result).
    pub fn calculate(&mut self, rules: &GratuityRules) -> Option<&CalculationResult> {
        let result = calculate_gratuity(
            parse_amount(&self.basic_salary),
            parse_amount(&self.years_of_service),
            self.contract_type,
            rules,
        );

        match result {
            Some(result) => {
                debug!(
                    contract_type = %result.contract_type,
                    gratuity = %result.gratuity,
                    "Gratuity calculated"
                );
                self.result = Some(result);
                self.result.as_ref()
            }
            None => {
                debug!("Gratuity inputs incomplete; keeping previous result");
                None
            }
        }
    }

    /// Clears every input and the last result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn filled(salary: &str, years: &str, contract_type: ContractType) -> GratuityCalculator {
        let mut calculator = GratuityCalculator::new();
        calculator.set_basic_salary(salary);
        calculator.set_years_of_service(years);
        calculator.set_contract_type(Some(contract_type));
        calculator
    }

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("9000"), Some(dec("9000")));
        assert_eq!(parse_amount("2.5"), Some(dec("2.5")));
        assert_eq!(parse_amount("  0.1\n"), Some(dec("0.1")));
        assert_eq!(parse_amount("-3"), Some(dec("-3")));
    }

    #[test]
    fn test_parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("9e3"), Some(dec("9000")));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("salary"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_parse_amount_rejects_digit_separators() {
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("9_000.50"), None);
        assert_eq!(parse_amount("1_0e3"), None);
        assert_eq!(parse_amount("1,000"), None);
        assert_eq!(parse_amount("1000"), Some(dec("1000")));
    }

    #[test]
    fn test_separator_text_leaves_calculator_incomplete() {
        let mut calculator = filled("9_000", "3", ContractType::Unlimited);

        assert!(calculator.calculate(&GratuityRules::default()).is_none());
        assert!(calculator.result().is_none());
    }

    #[test]
    fn test_calculate_stores_result() {
        let mut calculator = filled("9000", "7", ContractType::Limited);

        let gratuity = calculator.calculate(&GratuityRules::default()).map(|r| r.gratuity);

        assert_eq!(gratuity, Some(dec("49500")));
        assert_eq!(calculator.result().unwrap().gratuity, dec("49500"));
    }

    #[test]
    fn test_incomplete_inputs_keep_previous_result() {
        let rules = GratuityRules::default();
        let mut calculator = filled("9000", "3", ContractType::Unlimited);
        calculator.calculate(&rules);

        calculator.set_basic_salary("0");
        assert!(calculator.calculate(&rules).is_none());
        assert_eq!(calculator.result().unwrap().gratuity, dec("18900"));

        calculator.set_basic_salary("not a number");
        assert!(calculator.calculate(&rules).is_none());
        assert_eq!(calculator.result().unwrap().gratuity, dec("18900"));
    }

    #[test]
    fn test_new_result_replaces_previous() {
        let rules = GratuityRules::default();
        let mut calculator = filled("9000", "3", ContractType::Unlimited);
        calculator.calculate(&rules);

        calculator.set_years_of_service("7");
        calculator.calculate(&rules);

        assert_eq!(calculator.result().unwrap().gratuity, dec("44100"));
        assert_eq!(calculator.result().unwrap().total_years, dec("7"));
    }

    #[test]
    fn test_reset_clears_inputs_and_result() {
        let mut calculator = filled("9000", "3", ContractType::Unlimited);
        calculator.calculate(&GratuityRules::default());

        calculator.reset();

        assert!(calculator.result().is_none());
        assert_eq!(calculator.basic_salary(), "");
        assert_eq!(calculator.years_of_service(), "");
        assert_eq!(calculator.contract_type(), None);
        assert!(!calculator.can_calculate());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut calculator = GratuityCalculator::new();
        calculator.reset();
        calculator.reset();

        assert!(calculator.result().is_none());
        assert!(!calculator.can_calculate());
    }

    #[test]
    fn test_can_calculate_requires_every_field() {
        let mut calculator = GratuityCalculator::new();
        assert!(!calculator.can_calculate());

        calculator.set_basic_salary("9000");
        calculator.set_years_of_service("3");
        assert!(!calculator.can_calculate());

        calculator.set_contract_type(Some(ContractType::Limited));
        assert!(calculator.can_calculate());
    }
}
