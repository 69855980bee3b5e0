//! Configuration types for gratuity calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rules file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the regulation the rules implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationMetadata {
    /// Short code identifying the rule set (e.g., "MOHRE-EOSG").
    pub code: String,
    /// The human-readable name of the regulation.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official regulation documentation.
    pub source_url: String,
}

/// Accrual rate for unlimited contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlimitedRules {
    /// Reference to the regulation clause.
    pub clause: String,
    /// Days of basic wage per year of service.
    pub days_per_year: Decimal,
}

/// Tiered accrual rates for limited contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedRules {
    /// Reference to the regulation clause.
    pub clause: String,
    /// Service below this many years accrues nothing.
    pub minimum_years: Decimal,
    /// Years accrued at the first-tier rate before the subsequent rate applies.
    pub tier_threshold_years: Decimal,
    /// Days of basic wage per year within the first tier.
    pub first_tier_days_per_year: Decimal,
    /// Days of basic wage per year beyond the first tier.
    pub subsequent_days_per_year: Decimal,
}

/// The accrual constants used by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRules {
    /// Monthly salary is divided by this to obtain the daily wage.
    pub daily_wage_divisor: Decimal,
    /// Unlimited contract rules.
    pub unlimited: UnlimitedRules,
    /// Limited contract rules.
    pub limited: LimitedRules,
}

/// The complete rule set loaded from `rules.yaml`.
///
/// [`GratuityRules::default`] carries the UAE MOHRE constants: daily wage is
/// salary / 30, unlimited contracts accrue 21 days per year, and limited
/// contracts accrue 21 days per year for the first 5 years and 30 days per
/// year thereafter, with nothing below one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityRules {
    /// Regulation metadata.
    pub regulation: RegulationMetadata,
    /// Accrual constants.
    pub accrual: AccrualRules,
}

impl Default for GratuityRules {
    fn default() -> Self {
        Self {
            regulation: RegulationMetadata {
                code: "MOHRE-EOSG".to_string(),
                name: "UAE End-of-Service Gratuity".to_string(),
                version: "2024-01-01".to_string(),
                source_url: "https://www.mohre.gov.ae".to_string(),
            },
            accrual: AccrualRules {
                daily_wage_divisor: Decimal::from(30),
                unlimited: UnlimitedRules {
                    clause: "eosg.unlimited".to_string(),
                    days_per_year: Decimal::from(21),
                },
                limited: LimitedRules {
                    clause: "eosg.limited".to_string(),
                    minimum_years: Decimal::ONE,
                    tier_threshold_years: Decimal::from(5),
                    first_tier_days_per_year: Decimal::from(21),
                    subsequent_days_per_year: Decimal::from(30),
                },
            },
        }
    }
}

impl GratuityRules {
    /// Checks that the rules can be used for calculation.
    ///
    /// Returns [`EngineError::InvalidRules`] if the divisor is not positive,
    /// any days-per-year rate is negative, or the limited-contract minimum
    /// exceeds the tier threshold.
    pub fn validate(&self) -> EngineResult<()> {
        let accrual = &self.accrual;

        if accrual.daily_wage_divisor <= Decimal::ZERO {
            return Err(invalid("daily_wage_divisor", "must be greater than zero"));
        }

        let rates = [
            ("unlimited.days_per_year", accrual.unlimited.days_per_year),
            (
                "limited.first_tier_days_per_year",
                accrual.limited.first_tier_days_per_year,
            ),
            (
                "limited.subsequent_days_per_year",
                accrual.limited.subsequent_days_per_year,
            ),
        ];
        for (field, days) in rates {
            if days.is_sign_negative() {
                return Err(invalid(field, "must not be negative"));
            }
        }

        if accrual.limited.minimum_years.is_sign_negative() {
            return Err(invalid("limited.minimum_years", "must not be negative"));
        }

        if accrual.limited.minimum_years > accrual.limited.tier_threshold_years {
            return Err(invalid(
                "limited.minimum_years",
                "must not exceed limited.tier_threshold_years",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidRules {
        field: field.to_string(),
        message: message.to_string(),
    }
}
