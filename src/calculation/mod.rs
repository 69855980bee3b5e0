//! Calculation logic for the Gratuity Engine.
//!
//! This module contains the calculation functions for end-of-service gratuity:
//! daily wage derivation, unlimited and limited contract accrual, rounding,
//! the pure entry points that combine them, and the caller-owned calculator
//! state used by interactive forms.

mod calculator;
mod daily_wage;
mod gratuity;
mod limited_contract;
mod rounding;
mod unlimited_contract;

pub use calculator::{GratuityCalculator, parse_amount};
pub use daily_wage::{DailyWageResult, calculate_daily_wage};
pub use gratuity::{NEGATIVE_INPUT_WARNING, calculate_gratuity, compute};
pub use limited_contract::{
    BELOW_MINIMUM_SERVICE_WARNING, LimitedAccrualResult, calculate_limited_accrual,
};
pub use rounding::{RoundingResult, round_gratuity, round_half_up};
pub use unlimited_contract::{UnlimitedAccrualResult, calculate_unlimited_accrual};
