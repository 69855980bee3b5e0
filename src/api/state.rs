//! Application state for the Gratuity Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, GratuityRules};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded gratuity rules.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rules configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the gratuity rules.
    pub fn rules(&self) -> &GratuityRules {
        self.config.rules()
    }
}
