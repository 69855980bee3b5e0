//! Configuration loading and management for the Gratuity Engine.
//!
//! This module provides functionality to load gratuity rules from YAML,
//! including regulation metadata and the accrual constants.
//!
//! # Example
//!
//! ```no_run
//! use gratuity_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uae_mohre").unwrap();
//! println!("Loaded rules: {}", config.regulation().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, RULES_FILE_NAME};
pub use types::{AccrualRules, GratuityRules, LimitedRules, RegulationMetadata, UnlimitedRules};
