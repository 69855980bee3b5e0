//! Rounding of the final gratuity amount.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of rounding the accrued total, including the audit step.
#[derive(Debug, Clone)]
pub struct RoundingResult {
    /// The amount rounded to a whole currency unit.
    pub rounded: Decimal,
    /// The audit step recording the rounding.
    pub audit_step: AuditStep,
}

/// Rounds to the nearest whole unit, with ties going toward positive infinity.
///
/// This is `floor(value + 0.5)`: `2.5` becomes `3` and `-2.5` becomes `-2`.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("18899.5").unwrap()), Decimal::from(18900));
/// assert_eq!(round_half_up(Decimal::from_str("-2.5").unwrap()), Decimal::from(-2));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(Decimal::new(5, 1)).floor()
}

/// Rounds the unrounded gratuity total and records an audit step.
pub fn round_gratuity(total: Decimal, step_number: u32) -> RoundingResult {
    let rounded = round_half_up(total);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gratuity_rounding".to_string(),
        rule_name: "Gratuity Rounding".to_string(),
        clause_ref: "rounding".to_string(),
        input: serde_json::json!({
            "unrounded_total": total.normalize().to_string()
        }),
        output: serde_json::json!({
            "gratuity": rounded.to_string()
        }),
        reasoning: format!(
            "{} rounded to nearest whole unit = {}",
            total.normalize(),
            rounded
        ),
    };

    RoundingResult {
        rounded,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_amount_is_unchanged() {
        assert_eq!(round_half_up(dec("18900")), dec("18900"));
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(round_half_up(dec("20999.49")), dec("20999"));
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_half_up(dec("0.5")), dec("1"));
        assert_eq!(round_half_up(dec("1574.5")), dec("1575"));
    }

    #[test]
    fn test_negative_ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(dec("-2.5")), dec("-2"));
        assert_eq!(round_half_up(dec("-2.6")), dec("-3"));
    }

    #[test]
    fn test_rounding_near_limit_does_not_overflow() {
        assert_eq!(round_half_up(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_round_gratuity_audit_step() {
        let result = round_gratuity(dec("20999.999"), 3);

        assert_eq!(result.rounded, dec("21000"));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "gratuity_rounding");
        assert_eq!(result.audit_step.output["gratuity"], "21000");
    }
}
