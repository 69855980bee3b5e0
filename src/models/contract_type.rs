//! Contract type model.
//!
//! UAE employment contracts are either unlimited (no fixed end date) or
//! limited (fixed term). The two types accrue gratuity differently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The type of employment contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Contract without a fixed end date; flat accrual rate.
    Unlimited,
    /// Fixed-term contract; tiered accrual rate.
    Limited,
}

impl ContractType {
    /// Returns the selector value used on the wire (`"unlimited"` or `"limited"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Unlimited => "unlimited",
            ContractType::Limited => "limited",
        }
    }

    /// Returns the human-readable label shown next to a result.
    ///
    /// # Examples
    ///
    /// ```
    /// use gratuity_engine::models::ContractType;
    ///
    /// assert_eq!(ContractType::Limited.label(), "Limited Contract");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Unlimited => "Unlimited Contract",
            ContractType::Limited => "Limited Contract",
        }
    }

    /// Returns the plain-language description of how gratuity accrues.
    pub fn calculation_method(&self) -> &'static str {
        match self {
            ContractType::Unlimited => {
                "Unlimited contracts: 21 days salary for each year of service."
            }
            ContractType::Limited => {
                "Limited contracts: 21 days for first 5 years, then 30 days for each additional year."
            }
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unlimited" => Ok(ContractType::Unlimited),
            "limited" => Ok(ContractType::Limited),
            _ => Err(EngineError::InvalidContractType {
                value: s.to_string(),
            }),
        }
    }
}
