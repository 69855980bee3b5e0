//! Gratuity calculation entry points.
//!
//! [`compute`] turns a complete [`CalculationInput`] into a fresh
//! [`CalculationResult`]. [`calculate_gratuity`] accepts possibly-missing
//! inputs and yields `None` instead of computing when any of them is absent
//! or zero. Both are pure: identical inputs always give identical results.

use rust_decimal::Decimal;

use crate::config::GratuityRules;
use crate::models::{
    AccrualLine, AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult,
    ContractType,
};

use super::daily_wage::calculate_daily_wage;
use super::limited_contract::calculate_limited_accrual;
use super::rounding::round_gratuity;
use super::unlimited_contract::calculate_unlimited_accrual;

/// Warning code raised when the salary or the years of service are negative.
pub const NEGATIVE_INPUT_WARNING: &str = "NEGATIVE_INPUT";

/// Calculates the gratuity for possibly-missing inputs.
///
/// Returns `None` when the salary, the years of service, or the contract type
/// is missing, or when the salary or years are zero. Callers keep whatever
/// result they previously held in that case.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_gratuity;
/// use gratuity_engine::config::GratuityRules;
/// use gratuity_engine::models::ContractType;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::default();
///
/// let result = calculate_gratuity(
///     Some(Decimal::from(9000)),
///     Some(Decimal::from(7)),
///     Some(ContractType::Limited),
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(result.gratuity, Decimal::from(49500));
///
/// let none = calculate_gratuity(
///     Some(Decimal::ZERO),
///     Some(Decimal::from(5)),
///     Some(ContractType::Unlimited),
///     &rules,
/// );
/// assert!(none.is_none());
/// ```
pub fn calculate_gratuity(
    basic_salary: Option<Decimal>,
    years_of_service: Option<Decimal>,
    contract_type: Option<ContractType>,
    rules: &GratuityRules,
) -> Option<CalculationResult> {
    CalculationInput::from_parts(basic_salary, years_of_service, contract_type)
        .ok()
        .map(|input| compute(&input, rules))
}

/// Calculates the gratuity for a complete set of inputs.
///
/// The result echoes the inputs, carries the daily wage and the accrual
/// breakdown, and records every step in its audit trace. Negative inputs are
/// not rejected; they flow through the arithmetic and raise a warning.
pub fn compute(input: &CalculationInput, rules: &GratuityRules) -> CalculationResult {
    let accrual_rules = &rules.accrual;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    if input.basic_salary.is_sign_negative() || input.years_of_service.is_sign_negative() {
        warnings.push(AuditWarning {
            code: NEGATIVE_INPUT_WARNING.to_string(),
            message: format!(
                "Negative input accepted as-is (basic salary {}, years of service {})",
                input.basic_salary.normalize(),
                input.years_of_service.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let daily_wage_result = calculate_daily_wage(input.basic_salary, accrual_rules, step_number);
    steps.push(daily_wage_result.audit_step);
    step_number += 1;

    let accruals: Vec<AccrualLine> = match input.contract_type {
        ContractType::Unlimited => {
            let result = calculate_unlimited_accrual(
                input.basic_salary,
                input.years_of_service,
                accrual_rules,
                step_number,
            );
            steps.push(result.audit_step);
            vec![result.line]
        }
        ContractType::Limited => {
            let result = calculate_limited_accrual(
                input.basic_salary,
                input.years_of_service,
                accrual_rules,
                step_number,
            );
            steps.push(result.audit_step);
            warnings.extend(result.warnings);
            result.lines
        }
    };
    step_number += 1;

    let unrounded = AccrualLine::total(&accruals);
    let rounding = round_gratuity(unrounded, step_number);
    steps.push(rounding.audit_step);

    CalculationResult {
        gratuity: rounding.rounded,
        total_years: input.years_of_service,
        contract_type: input.contract_type,
        basic_salary: input.basic_salary,
        daily_wage: daily_wage_result.daily_wage,
        accruals,
        audit_trace: AuditTrace { steps, warnings },
    }
}
