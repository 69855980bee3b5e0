//! Gratuity Engine for UAE end-of-service benefits
//!
//! This crate calculates end-of-service gratuity from a basic monthly salary,
//! years of service, and contract type, following the MOHRE accrual rules for
//! unlimited and limited contracts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
