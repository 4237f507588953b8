//! Advisory texts emitted for underperforming characteristics.

use crate::core::CharacteristicId;
use std::collections::BTreeMap;

/// Shown instead of a list when nothing scores below the advisory threshold.
pub const ALL_CLEAR_MESSAGE: &str = "Excellent work! All quality dimensions are performing at a high level. No critical improvements needed.";

/// Closed lookup from characteristic to a fixed advisory string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationTable {
    entries: BTreeMap<CharacteristicId, String>,
}

impl RecommendationTable {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    #[rustfmt::skip]
    pub fn standard() -> Self {
        use CharacteristicId::*;

        let entries = [
            (PerformanceEfficiency, "Optimize database queries, enable caching, and compress assets to improve response times."),
            (Security, "Conduct a security audit, enforce strong authentication, and review data encryption protocols."),
            (Reliability, "Implement redundancy systems and improve error handling to maximize availability."),
            (Usability, "Conduct A/B testing, simplify navigation flows, and ensure accessibility standards are met."),
            (Compatibility, "Verify API standards and test integration with legacy systems."),
            (Maintainability, "Refactor code to reduce complexity and improve modularity for easier maintenance."),
            (Portability, "Containerize the application (e.g., Docker) to ensure consistency across environments."),
            (FunctionalSuitability, "Review user requirements and implement missing core functionalities."),
        ]
        .into_iter()
        .map(|(id, text)| (id, text.to_string()))
        .collect();

        Self { entries }
    }

    pub fn with_text(mut self, id: CharacteristicId, text: impl Into<String>) -> Self {
        self.entries.insert(id, text.into());
        self
    }

    /// Advisory for `id`, or the generic fallback naming the characteristic.
    pub fn advice_for(&self, id: CharacteristicId, name: &str) -> String {
        self.entries
            .get(&id)
            .cloned()
            .unwrap_or_else(|| fallback_advice(name))
    }
}

pub fn fallback_advice(name: &str) -> String {
    format!("Focus on improving {} metrics.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_text_for_every_characteristic() {
        let table = RecommendationTable::standard();
        for id in CharacteristicId::ALL {
            let text = table.advice_for(id, id.display_name());
            assert_ne!(text, fallback_advice(id.display_name()));
        }
    }

    #[test]
    fn test_missing_entry_falls_back_to_generic_text() {
        let table = RecommendationTable::empty();
        assert_eq!(
            table.advice_for(CharacteristicId::Security, "Security"),
            "Focus on improving Security metrics."
        );
    }

    #[test]
    fn test_override_replaces_text() {
        let table = RecommendationTable::standard().with_text(CharacteristicId::Security, "Patch.");
        assert_eq!(
            table.advice_for(CharacteristicId::Security, "Security"),
            "Patch."
        );
    }
}
