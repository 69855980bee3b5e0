//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading gratuity
//! rules from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{GratuityRules, RegulationMetadata};

/// Name of the rules file inside a configuration directory.
pub const RULES_FILE_NAME: &str = "rules.yaml";

/// Loads and provides access to the gratuity rules.
///
/// # Directory Structure
///
/// ```text
/// config/uae_mohre/
/// └── rules.yaml   # Regulation metadata and accrual constants
/// ```
///
/// # Example
///
/// ```no_run
/// use gratuity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uae_mohre").unwrap();
/// println!("Loaded rules: {}", loader.regulation().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: GratuityRules,
}

impl ConfigLoader {
    /// Loads the rules from the specified directory.
    ///
    /// Returns an error if `rules.yaml` is missing, is not valid YAML, or
    /// describes rules that fail [`GratuityRules::validate`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gratuity_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/uae_mohre")?;
    /// # Ok::<(), gratuity_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join(RULES_FILE_NAME);
        let rules = Self::load_yaml::<GratuityRules>(&rules_path)?;
        rules.validate()?;

        debug!(
            path = %rules_path.display(),
            code = %rules.regulation.code,
            version = %rules.regulation.version,
            "Loaded gratuity rules"
        );

        Ok(Self { rules })
    }

    /// Wraps an in-memory rule set, validating it first.
    pub fn from_rules(rules: GratuityRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &GratuityRules {
        &self.rules
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        &self.rules.regulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/uae_mohre"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gratuity_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regulation().code, "MOHRE-EOSG");
        assert_eq!(loader.regulation().name, "UAE End-of-Service Gratuity");
    }

    #[test]
    fn test_shipped_rules_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rules(), &GratuityRules::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join(RULES_FILE_NAME), "regulation: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rules.yaml"));
            }
            _ => panic!("Expected ConfigParseError error"),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_invalid_rules_returns_error() {
        let dir = scratch_dir("invalid");
        let mut rules = GratuityRules::default();
        rules.accrual.daily_wage_divisor = Decimal::ZERO;
        fs::write(
            dir.join(RULES_FILE_NAME),
            serde_yaml::to_string(&rules).unwrap(),
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::InvalidRules { field, .. }) => {
                assert_eq!(field, "daily_wage_divisor");
            }
            _ => panic!("Expected InvalidRules error"),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_from_rules_validates() {
        let mut rules = GratuityRules::default();
        rules.accrual.unlimited.days_per_year = Decimal::from(-1);

        assert!(ConfigLoader::from_rules(rules).is_err());
        assert!(ConfigLoader::from_rules(GratuityRules::default()).is_ok());
    }

    #[test]
    fn test_default_loader_uses_default_rules() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.rules(), &GratuityRules::default());
    }
}
