//! ISO 25023 style metric library keyed by characteristic.

use crate::core::{CharacteristicId, MetricDefinition};
use crate::errors::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// Immutable mapping from characteristic to its metric definitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricLibrary {
    entries: BTreeMap<CharacteristicId, Vec<MetricDefinition>>,
}

fn def(
    id: &str,
    name: &str,
    desc: &str,
    unit: &str,
    (min, max): (f64, f64),
    default: f64,
    inverse: bool,
) -> MetricDefinition {
    MetricDefinition {
        id: id.to_string(),
        name: name.to_string(),
        desc: desc.to_string(),
        unit: unit.to_string(),
        min,
        max,
        default,
        inverse,
    }
}

impl MetricLibrary {
    /// Library with no entries; every lookup yields an empty list.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// The built-in library of two metrics per characteristic.
    #[rustfmt::skip]
    pub fn standard() -> Self {
        use CharacteristicId::*;

        let mut entries = BTreeMap::new();
        entries.insert(
            FunctionalSuitability,
            vec![
                def("m_func_1", "Functional Completeness", "Missing functions / Total functions", "%", (0.0, 100.0), 95.0, false),
                def("m_func_2", "Functional Correctness", "Correct functions / Total functions", "%", (0.0, 100.0), 98.0, false),
            ],
        );
        entries.insert(
            PerformanceEfficiency,
            vec![
                def("m_perf_1", "Mean Response Time", "Average time to respond to user input", "ms", (0.0, 5000.0), 200.0, true),
                def("m_perf_2", "CPU Utilization", "Average processor usage under load", "%", (0.0, 100.0), 45.0, true),
            ],
        );
        entries.insert(
            Compatibility,
            vec![
                def("m_comp_1", "Co-existence", "Conflicts with other installed software", "count", (0.0, 100.0), 0.0, true),
                def("m_comp_2", "Data Exchangeability", "Successful data exchange formats", "%", (0.0, 100.0), 100.0, false),
            ],
        );
        entries.insert(
            Usability,
            vec![
                def("m_usab_1", "Task Success Rate", "Users completing task successfully", "%", (0.0, 100.0), 90.0, false),
                def("m_usab_2", "User Error Rate", "User errors per task session", "count", (0.0, 50.0), 2.0, true),
            ],
        );
        entries.insert(
            Reliability,
            vec![
                def("m_rel_1", "Availability", "System uptime percentage", "%", (0.0, 100.0), 99.9, false),
                def("m_rel_2", "Mean Recovery Time", "Time to recover from failure", "min", (0.0, 600.0), 5.0, true),
            ],
        );
        entries.insert(
            Security,
            vec![
                def("m_sec_1", "Vulnerability Density", "Known vulnerabilities per KLOC", "v/KLOC", (0.0, 100.0), 0.5, true),
                def("m_sec_2", "Encryption Strength", "Key length conformity (100=Pass)", "score", (0.0, 100.0), 100.0, false),
            ],
        );
        entries.insert(
            Maintainability,
            vec![
                def("m_maint_1", "Modularity", "Coupling dependency score", "score", (0.0, 100.0), 80.0, false),
                def("m_maint_2", "Reusability", "Assets usable in other systems", "%", (0.0, 100.0), 30.0, false),
            ],
        );
        entries.insert(
            Portability,
            vec![
                def("m_port_1", "Installability", "Installation time", "min", (0.0, 120.0), 2.0, true),
                def("m_port_2", "Adaptability", "Environments supported without change", "count", (0.0, 50.0), 3.0, false),
            ],
        );

        Self { entries }
    }

    /// Definitions for a characteristic; empty when unmapped.
    pub fn definitions(&self, id: CharacteristicId) -> &[MetricDefinition] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the definitions of one characteristic after validating them.
    pub fn with_definitions(
        mut self,
        id: CharacteristicId,
        definitions: Vec<MetricDefinition>,
    ) -> Result<Self> {
        validate_definitions(id, &definitions)?;
        self.entries.insert(id, definitions);
        Ok(self)
    }

    /// Same as [`with_definitions`](Self::with_definitions) without validation.
    #[cfg(test)]
    pub(crate) fn with_unchecked_definitions(
        mut self,
        id: CharacteristicId,
        definitions: Vec<MetricDefinition>,
    ) -> Self {
        self.entries.insert(id, definitions);
        self
    }
}

/// Check range, default and id uniqueness of a characteristic's metrics.
pub fn validate_definitions(id: CharacteristicId, definitions: &[MetricDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for metric in definitions {
        if metric.id.trim().is_empty() {
            return Err(Error::config(format!("{}: metric with empty id", id)));
        }
        if !seen.insert(metric.id.as_str()) {
            return Err(Error::config(format!(
                "{}: duplicate metric id '{}'",
                id, metric.id
            )));
        }
        if !metric.has_valid_range() {
            return Err(Error::DegenerateRange {
                characteristic: id,
                metric: metric.id.clone(),
                min: metric.min,
                max: metric.max,
            });
        }
        if !(metric.min..=metric.max).contains(&metric.default) {
            return Err(Error::config(format!(
                "{}/{}: default {} outside range {} - {}",
                id, metric.id, metric.default, metric.min, metric.max
            )));
        }
    }
    Ok(())
}
