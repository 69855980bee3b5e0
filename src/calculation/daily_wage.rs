//! Daily wage calculation.
//!
//! Gratuity accrues in days of basic wage. The daily wage is the basic
//! monthly salary divided by the configured divisor (30 under MOHRE rules).

use rust_decimal::Decimal;

use crate::config::AccrualRules;
use crate::models::AuditStep;

/// The result of a daily wage calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyWageResult {
    /// The daily wage.
    pub daily_wage: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Divides `basic_salary` by `divisor`, yielding zero for a zero divisor.
pub(crate) fn per_day(basic_salary: Decimal, divisor: Decimal) -> Decimal {
    basic_salary.checked_div(divisor).unwrap_or(Decimal::ZERO)
}

/// Accrued amount for `days_per_year` days of wage over `years` years.
///
/// Multiplies before dividing so whole-unit salaries stay exact.
pub(crate) fn accrue(
    basic_salary: Decimal,
    days_per_year: Decimal,
    years: Decimal,
    divisor: Decimal,
) -> Decimal {
    per_day(
        basic_salary.saturating_mul(days_per_year).saturating_mul(years),
        divisor,
    )
}

/// Calculates the daily wage for a basic monthly salary.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_daily_wage;
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::default();
/// let result = calculate_daily_wage(Decimal::from(9000), &rules.accrual, 1);
/// assert_eq!(result.daily_wage, Decimal::from(300));
/// ```
pub fn calculate_daily_wage(
    basic_salary: Decimal,
    rules: &AccrualRules,
    step_number: u32,
) -> DailyWageResult {
    let daily_wage = per_day(basic_salary, rules.daily_wage_divisor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_wage".to_string(),
        rule_name: "Daily Wage".to_string(),
        clause_ref: "daily_wage".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "divisor": rules.daily_wage_divisor.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} = {}",
            basic_salary.normalize(),
            rules.daily_wage_divisor.normalize(),
            daily_wage.normalize()
        ),
    };

    DailyWageResult {
        daily_wage,
        audit_step,
    }
}
