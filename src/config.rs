use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sample::DEFAULT_SAMPLE_SIZE;

/// Configuration for the aggregation engine and the dashboard shell
///
/// Every field has a default, so a config file only needs to list the values
/// it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Persian calendar year that ages and tenures are measured against
    pub reference_year: i32,

    /// Number of records produced by the demo data action
    pub sample_size: usize,

    /// Earliest birth year treated as plausible
    pub min_birth_year: i32,

    /// Latest birth year treated as plausible
    pub max_birth_year: i32,

    /// Ages must stay strictly below this value
    pub max_age: i32,

    /// Earliest hire year treated as plausible
    pub min_hire_year: i32,

    /// Tenures must stay strictly below this value
    pub max_tenure: i32,
}

impl Default for DashboardConfig {
    /// Creates the configuration used by the dashboard out of the box
    ///
    /// # Returns
    /// * `DashboardConfig` - Default configuration with:
    ///   - reference year 1403
    ///   - 78 demo records
    ///   - birth years 1300..=1410, ages below 100
    ///   - hire years from 1350, tenures below 60
    fn default() -> Self {
        Self {
            reference_year: 1403,
            sample_size: DEFAULT_SAMPLE_SIZE,
            min_birth_year: 1300,
            max_birth_year: 1410,
            max_age: 100,
            min_hire_year: 1350,
            max_tenure: 60,
        }
    }
}

impl DashboardConfig {
    /// Load a configuration from a JSON file
    ///
    /// Missing keys fall back to [`DashboardConfig::default`].
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Result<DashboardConfig, ConfigError>` - The parsed configuration or an error
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"reference_year": 1404}"#).unwrap();
        assert_eq!(config.reference_year, 1404);
        assert_eq!(config.sample_size, 78);
        assert_eq!(config.max_tenure, 60);
    }
}
