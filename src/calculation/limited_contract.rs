//! Limited contract accrual.
//!
//! Limited contracts accrue in two tiers:
//!
//! | Years of service          | Accrual                                              |
//! |---------------------------|------------------------------------------------------|
//! | below `minimum_years`     | nothing                                              |
//! | `minimum_years` up to 5   | 21 days per year                                     |
//! | 5 and above               | 21 days for each of the first 5, 30 days thereafter  |
//!
//! Service below the minimum accrues nothing at all, unlike unlimited
//! contracts, and is flagged with an audit warning.

use rust_decimal::Decimal;

use crate::config::AccrualRules;
use crate::models::{AccrualLine, AccrualTier, AuditStep, AuditWarning};

use super::daily_wage::{accrue, per_day};

/// Warning code raised when a limited contract is below the minimum service.
pub const BELOW_MINIMUM_SERVICE_WARNING: &str = "LIMITED_BELOW_MINIMUM_SERVICE";

/// The result of a limited contract accrual.
#[derive(Debug, Clone)]
pub struct LimitedAccrualResult {
    /// Accrual lines; empty when service is below the minimum.
    pub lines: Vec<AccrualLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Warnings raised by this calculation.
    pub warnings: Vec<AuditWarning>,
}

impl LimitedAccrualResult {
    /// Returns the unrounded sum of the accrual lines.
    pub fn total(&self) -> Decimal {
        AccrualLine::total(&self.lines)
    }
}

/// Calculates the gratuity accrued under a limited contract.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_limited_accrual;
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::default();
/// let result = calculate_limited_accrual(
///     Decimal::from(9000),
///     Decimal::from(7),
///     &rules.accrual,
///     2,
/// );
/// // 300 x 21 x 5 + 300 x 30 x 2
/// assert_eq!(result.total(), Decimal::from(49500));
/// ```
pub fn calculate_limited_accrual(
    basic_salary: Decimal,
    years_of_service: Decimal,
    rules: &AccrualRules,
    step_number: u32,
) -> LimitedAccrualResult {
    let limited = &rules.limited;
    let divisor = rules.daily_wage_divisor;
    let daily_wage = per_day(basic_salary, divisor);

    let line = |tier: AccrualTier, days_per_year: Decimal, years: Decimal| AccrualLine {
        tier,
        days_per_year,
        years,
        daily_wage,
        amount: accrue(basic_salary, days_per_year, years, divisor),
        clause_ref: limited.clause.clone(),
    };

    let mut warnings = Vec::new();
    let (lines, reasoning) = if years_of_service < limited.minimum_years {
        warnings.push(AuditWarning {
            code: BELOW_MINIMUM_SERVICE_WARNING.to_string(),
            message: format!(
                "Limited contract service of {} years is below the {} year minimum; no gratuity accrues",
                years_of_service.normalize(),
                limited.minimum_years.normalize()
            ),
            severity: "medium".to_string(),
        });
        (
            Vec::new(),
            format!(
                "{} years is below the {} year minimum - no accrual",
                years_of_service.normalize(),
                limited.minimum_years.normalize()
            ),
        )
    } else if years_of_service < limited.tier_threshold_years {
        let first = line(
            AccrualTier::LimitedFirstTier,
            limited.first_tier_days_per_year,
            years_of_service,
        );
        let reasoning = format!(
            "{} days x {} years at daily wage {} = {}",
            first.days_per_year.normalize(),
            first.years.normalize(),
            daily_wage.normalize(),
            first.amount.normalize()
        );
        (vec![first], reasoning)
    } else {
        let first = line(
            AccrualTier::LimitedFirstTier,
            limited.first_tier_days_per_year,
            limited.tier_threshold_years,
        );
        let subsequent = line(
            AccrualTier::LimitedSubsequent,
            limited.subsequent_days_per_year,
            years_of_service - limited.tier_threshold_years,
        );
        let reasoning = format!(
            "{} days x {} years + {} days x {} years at daily wage {} = {} + {}",
            first.days_per_year.normalize(),
            first.years.normalize(),
            subsequent.days_per_year.normalize(),
            subsequent.years.normalize(),
            daily_wage.normalize(),
            first.amount.normalize(),
            subsequent.amount.normalize()
        );
        (vec![first, subsequent], reasoning)
    };

    let total = AccrualLine::total(&lines);

    let audit_step = AuditStep {
        step_number,
        rule_id: "limited_accrual".to_string(),
        rule_name: "Limited Contract Accrual".to_string(),
        clause_ref: limited.clause.clone(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "years_of_service": years_of_service.normalize().to_string(),
            "minimum_years": limited.minimum_years.normalize().to_string(),
            "tier_threshold_years": limited.tier_threshold_years.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": total.normalize().to_string(),
            "tiers_applied": lines.len()
        }),
        reasoning,
    };

    LimitedAccrualResult {
        lines,
        audit_step,
        warnings,
    }
}
