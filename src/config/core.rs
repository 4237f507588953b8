use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::validate_definitions;
use crate::core::{CharacteristicId, MetricDefinition, DEFAULT_PROJECT_NAME};
use crate::errors::{Error, Result};
use crate::output::OutputFormat;

/// Root configuration structure for qmsim
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QmsimConfig {
    /// Name shown in the wizard header and reports
    #[serde(default)]
    pub project_name: Option<String>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Per-characteristic replacements for the built-in metric library
    #[serde(default)]
    pub metrics: Option<BTreeMap<String, Vec<MetricDefinition>>>,

    /// Per-characteristic replacements for recommendation texts
    #[serde(default)]
    pub recommendations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

fn parse_key(section: &str, key: &str) -> Result<CharacteristicId> {
    key.parse::<CharacteristicId>()
        .map_err(|e| Error::config(format!("[{}] {}", section, e)))
}

impl QmsimConfig {
    pub fn project_name(&self) -> &str {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_PROJECT_NAME)
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    /// Metric library replacements keyed by characteristic.
    pub fn metric_overrides(&self) -> Result<Vec<(CharacteristicId, &[MetricDefinition])>> {
        self.metrics
            .iter()
            .flatten()
            .map(|(key, defs)| Ok((parse_key("metrics", key)?, defs.as_slice())))
            .collect()
    }

    /// Recommendation text replacements keyed by characteristic.
    pub fn recommendation_overrides(&self) -> Result<Vec<(CharacteristicId, &str)>> {
        self.recommendations
            .iter()
            .flatten()
            .map(|(key, text)| Ok((parse_key("recommendations", key)?, text.as_str())))
            .collect()
    }

    /// Check keys and metric definitions.
    pub fn validate(&self) -> Result<()> {
        for (id, definitions) in self.metric_overrides()? {
            validate_definitions(id, definitions)?;
        }
        self.recommendation_overrides()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: QmsimConfig = toml::from_str("").unwrap();
        assert_eq!(config.project_name(), DEFAULT_PROJECT_NAME);
        assert_eq!(config.default_format(), None);
        assert!(config.metric_overrides().unwrap().is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_full_config_parses() {
        let config: QmsimConfig = toml::from_str(indoc! {r#"
            project_name = "Checkout Service"

            [output]
            default_format = "json"
            use_color = false

            [metrics]
            perf = [
                { id = "p95", name = "P95 Latency", unit = "ms", min = 0, max = 2000, default = 300, inverse = true },
            ]

            [recommendations]
            sec = "Rotate keys quarterly."
        "#})
        .unwrap();

        assert_eq!(config.project_name(), "Checkout Service");
        assert_eq!(config.default_format(), Some(OutputFormat::Json));
        assert_eq!(config.use_color(), Some(false));
        let overrides = config.metric_overrides().unwrap();
        assert_eq!(overrides[0].0, CharacteristicId::PerformanceEfficiency);
        assert_eq!(overrides[0].1[0].id, "p95");
        assert_eq!(
            config.recommendation_overrides().unwrap(),
            vec![(CharacteristicId::Security, "Rotate keys quarterly.")]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_unknown_characteristic_key_is_rejected() {
        let config: QmsimConfig = toml::from_str(indoc! {r#"
            [recommendations]
            speed = "Go faster."
        "#})
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unknown characteristic 'speed'"));
    }

    #[test]
    fn test_degenerate_metric_is_rejected() {
        let config: QmsimConfig = toml::from_str(indoc! {r#"
            [metrics]
            rel = [ { id = "flat", name = "Flat", min = 3, max = 3, default = 3 } ]
        "#})
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::DegenerateRange { .. })
        ));
    }
}
