//! Calculation result models for the Gratuity Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a gratuity calculation, including the accrual
//! breakdown and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractType;

/// The accrual tier a breakdown line belongs to.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::AccrualTier;
///
/// let tier = AccrualTier::LimitedFirstTier;
/// assert_eq!(format!("{:?}", tier), "LimitedFirstTier");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualTier {
    /// Flat accrual for unlimited contracts.
    Unlimited,
    /// Limited contract years up to the tier threshold.
    LimitedFirstTier,
    /// Limited contract years beyond the tier threshold.
    LimitedSubsequent,
}

/// A single line of the gratuity breakdown.
///
/// Each line records how many years were counted at which days-per-year rate,
/// and the unrounded amount they contribute.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::{AccrualLine, AccrualTier};
/// use rust_decimal::Decimal;
///
/// let line = AccrualLine {
///     tier: AccrualTier::Unlimited,
///     days_per_year: Decimal::from(21),
///     years: Decimal::from(3),
///     daily_wage: Decimal::from(300),
///     amount: Decimal::from(18900),
///     clause_ref: "eosg.unlimited".to_string(),
/// };
/// assert_eq!(line.amount, line.daily_wage * line.days_per_year * line.years);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualLine {
    /// The tier this line accrues under.
    pub tier: AccrualTier,
    /// Days of basic wage awarded per year of service.
    pub days_per_year: Decimal,
    /// Years of service counted in this tier.
    pub years: Decimal,
    /// The daily wage the line is based on.
    pub daily_wage: Decimal,
    /// The unrounded contribution of this line.
    pub amount: Decimal,
    /// Reference to the regulation clause for this tier.
    pub clause_ref: String,
}

impl AccrualLine {
    /// Sums the amounts of `lines`, saturating at the `Decimal` bounds.
    pub fn total(lines: &[AccrualLine]) -> Decimal {
        lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.amount))
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the regulation clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but look suspicious; they never
/// prevent a result from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a gratuity calculation.
///
/// A result is built fresh for every calculation and never mutated afterwards.
/// It echoes the inputs it was computed from so a caller can display them
/// alongside the amount.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::{AuditTrace, CalculationResult, ContractType};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     gratuity: Decimal::from(18900),
///     total_years: Decimal::from(3),
///     contract_type: ContractType::Unlimited,
///     basic_salary: Decimal::from(9000),
///     daily_wage: Decimal::from(300),
///     accruals: vec![],
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.gratuity, Decimal::from(18900));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The gratuity amount, rounded to a whole currency unit.
    pub gratuity: Decimal,
    /// Echo of the years of service.
    pub total_years: Decimal,
    /// Echo of the contract type.
    pub contract_type: ContractType,
    /// Echo of the basic monthly salary.
    pub basic_salary: Decimal,
    /// Basic salary divided by the daily-wage divisor.
    pub daily_wage: Decimal,
    /// The accrual lines summed into the gratuity.
    pub accruals: Vec<AccrualLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the unrounded sum of all accrual lines.
    pub fn unrounded_total(&self) -> Decimal {
        AccrualLine::total(&self.accruals)
    }
}
