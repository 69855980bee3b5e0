//! Unlimited contract accrual.
//!
//! Unlimited contracts accrue a flat number of days of basic wage for every
//! year of service, from the first day. There is no minimum-service cutoff,
//! so half a year of service accrues half a year's days.

use rust_decimal::Decimal;

use crate::config::AccrualRules;
use crate::models::{AccrualLine, AccrualTier, AuditStep};

use super::daily_wage::{accrue, per_day};

/// The result of an unlimited contract accrual.
#[derive(Debug, Clone)]
pub struct UnlimitedAccrualResult {
    /// The single flat-rate accrual line.
    pub line: AccrualLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the gratuity accrued under an unlimited contract.
///
/// `amount = basic_salary / divisor * days_per_year * years_of_service`
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_unlimited_accrual;
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::default();
/// let result = calculate_unlimited_accrual(
///     Decimal::from(9000),
///     Decimal::from(3),
///     &rules.accrual,
///     2,
/// );
/// assert_eq!(result.line.amount, Decimal::from(18900));
/// ```
pub fn calculate_unlimited_accrual(
    basic_salary: Decimal,
    years_of_service: Decimal,
    rules: &AccrualRules,
    step_number: u32,
) -> UnlimitedAccrualResult {
    let days_per_year = rules.unlimited.days_per_year;
    let daily_wage = per_day(basic_salary, rules.daily_wage_divisor);
    let amount = accrue(
        basic_salary,
        days_per_year,
        years_of_service,
        rules.daily_wage_divisor,
    );

    let line = AccrualLine {
        tier: AccrualTier::Unlimited,
        days_per_year,
        years: years_of_service,
        daily_wage,
        amount,
        clause_ref: rules.unlimited.clause.clone(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "unlimited_accrual".to_string(),
        rule_name: "Unlimited Contract Accrual".to_string(),
        clause_ref: rules.unlimited.clause.clone(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "years_of_service": years_of_service.normalize().to_string(),
            "days_per_year": days_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} days x {} years at daily wage {} = {}",
            days_per_year.normalize(),
            years_of_service.normalize(),
            daily_wage.normalize(),
            amount.normalize()
        ),
    };

    UnlimitedAccrualResult { line, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GratuityRules;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> AccrualRules {
        GratuityRules::default().accrual
    }

    #[test]
    fn test_three_years_accrue_sixty_three_days() {
        let result = calculate_unlimited_accrual(dec("9000"), dec("3"), &rules(), 2);

        assert_eq!(result.line.amount, dec("18900"));
        assert_eq!(result.line.tier, AccrualTier::Unlimited);
        assert_eq!(result.line.days_per_year, dec("21"));
        assert_eq!(result.line.years, dec("3"));
        assert_eq!(result.line.daily_wage, dec("300"));
        assert_eq!(result.line.clause_ref, "eosg.unlimited");
    }

    #[test]
    fn test_long_service_stays_at_flat_rate() {
        let result = calculate_unlimited_accrual(dec("9000"), dec("7"), &rules(), 2);
        assert_eq!(result.line.amount, dec("44100"));
    }

    #[test]
    fn test_service_below_one_year_still_accrues() {
        let result = calculate_unlimited_accrual(dec("9000"), dec("0.5"), &rules(), 2);
        assert_eq!(result.line.amount, dec("3150"));
    }

    #[test]
    fn test_negative_years_pass_through() {
        let result = calculate_unlimited_accrual(dec("9000"), dec("-1"), &rules(), 2);
        assert_eq!(result.line.amount, dec("-6300"));
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let result = calculate_unlimited_accrual(dec("9000"), dec("3"), &rules(), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "unlimited_accrual");
        assert_eq!(result.audit_step.input["daily_wage"], "300");
        assert_eq!(result.audit_step.input["years_of_service"], "3");
        assert_eq!(result.audit_step.output["amount"], "18900");
    }
}
