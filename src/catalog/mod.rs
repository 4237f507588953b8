//! Immutable configuration tables loaded once at startup.
//!
//! - [`scenarios`]: predefined case studies and their target characteristics
//! - [`metrics`]: per-characteristic metric definitions
//! - [`recommendations`]: advisory text per characteristic

pub mod metrics;
pub mod recommendations;
pub mod scenarios;

pub use metrics::{validate_definitions, MetricLibrary};
pub use recommendations::{fallback_advice, RecommendationTable, ALL_CLEAR_MESSAGE};
pub use scenarios::{scenario, Scenario, SCENARIOS};

use crate::config::QmsimConfig;
use crate::errors::Result;

/// The lookup tables a wizard session reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub metrics: MetricLibrary,
    pub recommendations: RecommendationTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            metrics: MetricLibrary::standard(),
            recommendations: RecommendationTable::standard(),
        }
    }

    /// Built-in tables with the overrides from a configuration file applied.
    pub fn from_config(config: &QmsimConfig) -> Result<Self> {
        let mut catalog = Self::standard();
        for (id, definitions) in config.metric_overrides()? {
            catalog.metrics = catalog.metrics.with_definitions(id, definitions.to_vec())?;
        }
        for (id, text) in config.recommendation_overrides()? {
            catalog.recommendations = catalog.recommendations.with_text(id, text);
        }
        Ok(catalog)
    }
}
