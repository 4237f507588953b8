//! Weighted analysis of a finished measurement.
//!
//! Pipeline: metric scores → characteristic averages → weighted overall
//! score → rating, gaps, recommendations and chart payload. Nothing here
//! mutates the project state.

use super::chart::RadarChart;
use super::rating::{Gap, Rating, ADVISORY_BELOW};
use super::score_normalizer::{average_score, score_metric, MetricScore};
use crate::catalog::{RecommendationTable, ALL_CLEAR_MESSAGE};
use crate::core::{Characteristic, CharacteristicId, ProjectState};
use serde::Serialize;
use std::fmt;

/// Score of one selected characteristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicScore {
    pub id: CharacteristicId,
    pub name: String,
    pub weight: i64,
    pub score: u32,
    pub gap: Gap,
    pub metrics: Vec<MetricScore>,
}

/// Advisory for one characteristic scoring below 80.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub characteristic: CharacteristicId,
    pub text: String,
}

/// Either a list of recommendations or the single all-clear message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advice {
    Actions { items: Vec<Recommendation> },
    AllClear { message: String },
}

impl Advice {
    pub fn items(&self) -> &[Recommendation] {
        match self {
            Advice::Actions { items } => items,
            Advice::AllClear { .. } => &[],
        }
    }

    pub fn all_clear_message(&self) -> Option<&str> {
        match self {
            Advice::Actions { .. } => None,
            Advice::AllClear { message } => Some(message),
        }
    }
}

/// Problems found while scoring that the user should fix in configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringIssue {
    DegenerateRange {
        characteristic: CharacteristicId,
        metric: String,
    },
}

impl fmt::Display for ScoringIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringIssue::DegenerateRange {
                characteristic,
                metric,
            } => write!(
                f,
                "Configuration error: metric {}/{} has an empty range (min must be below max); scored as {}",
                characteristic,
                metric,
                super::score_normalizer::DEGENERATE_RANGE_SCORE
            ),
        }
    }
}

/// Full result of the Analyze step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub project_name: String,
    pub characteristics: Vec<CharacteristicScore>,
    /// Weighted sum rounded to one decimal place.
    pub overall_score: f64,
    pub rating: Rating,
    pub advice: Advice,
    pub chart: RadarChart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ScoringIssue>,
}

impl Analysis {
    /// Overall score as displayed, e.g. `68.0`.
    pub fn overall_display(&self) -> String {
        format!("{:.1}", self.overall_score)
    }
}

/// Score a single characteristic from its loaded metrics.
pub fn score_characteristic(characteristic: &Characteristic) -> CharacteristicScore {
    let metrics: Vec<MetricScore> = characteristic.metrics.iter().map(score_metric).collect();
    let score = average_score(&metrics);
    CharacteristicScore {
        id: characteristic.id,
        name: characteristic.name.clone(),
        weight: characteristic.weight,
        score,
        gap: Gap::for_score(score),
        metrics,
    }
}

/// `sum(score * weight / 100)` rounded to one decimal.
///
/// Not renormalized by the actual weight total; only meaningful when the
/// weights add up to 100.
pub fn overall_score(scores: &[CharacteristicScore]) -> f64 {
    let sum: f64 = scores
        .iter()
        .map(|c| f64::from(c.score) * (c.weight as f64 / 100.0))
        .sum();
    round_to_tenth(sum)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Recommendations for every characteristic below the advisory threshold.
pub fn recommend(scores: &[CharacteristicScore], table: &RecommendationTable) -> Advice {
    let items: Vec<Recommendation> = scores
        .iter()
        .filter(|c| c.score < ADVISORY_BELOW)
        .map(|c| Recommendation {
            characteristic: c.id,
            text: table.advice_for(c.id, &c.name),
        })
        .collect();

    if items.is_empty() {
        Advice::AllClear {
            message: ALL_CLEAR_MESSAGE.to_string(),
        }
    } else {
        Advice::Actions { items }
    }
}

/// Analyze the selected characteristics of a project.
pub fn analyze(state: &ProjectState, recommendations: &RecommendationTable) -> Analysis {
    let characteristics: Vec<CharacteristicScore> =
        state.selected().map(score_characteristic).collect();

    let issues: Vec<ScoringIssue> = characteristics
        .iter()
        .flat_map(|c| {
            c.metrics
                .iter()
                .filter(|m| m.degenerate)
                .map(|m| ScoringIssue::DegenerateRange {
                    characteristic: c.id,
                    metric: m.id.clone(),
                })
        })
        .collect();
    for issue in &issues {
        tracing::warn!("{}", issue);
    }

    let overall = overall_score(&characteristics);
    let chart = RadarChart::new(
        characteristics.iter().map(|c| c.name.clone()).collect(),
        characteristics.iter().map(|c| c.score).collect(),
    );

    tracing::debug!(
        characteristics = characteristics.len(),
        overall,
        "Analysis computed"
    );

    Analysis {
        project_name: state.project_name.clone(),
        advice: recommend(&characteristics, recommendations),
        rating: Rating::from_score(overall),
        overall_score: overall,
        chart,
        characteristics,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MetricLibrary;
    use crate::core::{Metric, MetricDefinition};
    use crate::scoring::rating::GapSeverity;
    use pretty_assertions::assert_eq;

    fn scored(id: CharacteristicId, weight: i64, score: u32) -> CharacteristicScore {
        CharacteristicScore {
            id,
            name: id.display_name().to_string(),
            weight,
            score,
            gap: Gap::for_score(score),
            metrics: Vec::new(),
        }
    }

    #[test]
    fn test_overall_score_weighted_sum() {
        let scores = [
            scored(CharacteristicId::Security, 60, 80),
            scored(CharacteristicId::Usability, 40, 50),
        ];
        assert_eq!(overall_score(&scores), 68.0);
    }

    #[test]
    fn test_overall_score_is_not_renormalized() {
        let scores = [
            scored(CharacteristicId::Security, 30, 80),
            scored(CharacteristicId::Usability, 20, 50),
        ];
        assert_eq!(overall_score(&scores), 34.0);
    }

    #[test]
    fn test_overall_score_rounds_to_one_decimal() {
        let scores = [
            scored(CharacteristicId::Security, 34, 97),
            scored(CharacteristicId::Usability, 33, 76),
            scored(CharacteristicId::Reliability, 33, 99),
        ];
        // 32.98 + 25.08 + 32.67 = 90.73
        assert_eq!(overall_score(&scores), 90.7);
    }

    #[test]
    fn test_overall_score_rounds_half_tenths_up() {
        let scores = [
            scored(CharacteristicId::Security, 5, 2),
            scored(CharacteristicId::Usability, 95, 63),
        ];
        // 59.949999... in binary, but scaling by ten lands on 599.5
        assert_eq!(overall_score(&scores), 60.0);
        assert_eq!(Rating::from_score(overall_score(&scores)), Rating::Good);
    }

    #[test]
    fn test_recommendation_threshold_at_79_and_80() {
        let table = RecommendationTable::standard();

        let below = recommend(&[scored(CharacteristicId::Security, 100, 79)], &table);
        assert_eq!(below.items().len(), 1);
        assert_eq!(below.items()[0].characteristic, CharacteristicId::Security);
        assert_eq!(below.all_clear_message(), None);

        let at = recommend(&[scored(CharacteristicId::Security, 100, 80)], &table);
        assert!(at.items().is_empty());
        assert_eq!(at.all_clear_message(), Some(ALL_CLEAR_MESSAGE));
    }

    #[test]
    fn test_characteristic_without_metrics_scores_zero() {
        let mut state = ProjectState::default();
        crate::wizard::selector::toggle_characteristic(&mut state, CharacteristicId::Security);
        let analysis = analyze(&state, &RecommendationTable::standard());
        assert_eq!(analysis.characteristics[0].score, 0);
        assert_eq!(
            analysis.characteristics[0].gap.severity,
            Some(GapSeverity::Critical)
        );
    }

    #[test]
    fn test_degenerate_metric_reported_as_issue() {
        let mut state = ProjectState::default();
        crate::wizard::selector::toggle_characteristic(&mut state, CharacteristicId::Security);
        let flat = MetricDefinition {
            id: "m_flat".into(),
            name: "Flat".into(),
            desc: String::new(),
            unit: "%".into(),
            min: 10.0,
            max: 10.0,
            default: 10.0,
            inverse: false,
        };
        let library = MetricLibrary::empty()
            .with_unchecked_definitions(CharacteristicId::Security, vec![flat]);
        crate::wizard::collector::auto_load(&mut state, &library);

        let analysis = analyze(&state, &RecommendationTable::standard());

        assert_eq!(analysis.characteristics[0].score, 100);
        assert_eq!(
            analysis.issues,
            vec![ScoringIssue::DegenerateRange {
                characteristic: CharacteristicId::Security,
                metric: "m_flat".into(),
            }]
        );
    }

    #[test]
    fn test_chart_payload_mirrors_scores() {
        let mut state = ProjectState::default();
        crate::wizard::selector::select_scenario(&mut state, crate::core::ScenarioId::Mobile);
        crate::wizard::collector::auto_load(&mut state, &MetricLibrary::standard());
        let analysis = analyze(&state, &RecommendationTable::standard());

        assert_eq!(
            analysis.chart.labels,
            vec![
                "Performance Efficiency",
                "Compatibility",
                "Usability",
                "Portability"
            ]
        );
        let scores: Vec<u32> = analysis.characteristics.iter().map(|c| c.score).collect();
        assert_eq!(analysis.chart.scores, scores);
        assert_eq!(analysis.chart.options.suggested_max, 100);
    }

    #[test]
    fn test_metric_override_changes_score() {
        let mut state = ProjectState::default();
        let maint = CharacteristicId::Maintainability;
        crate::wizard::selector::toggle_characteristic(&mut state, maint);
        state.characteristic_mut(maint).metrics = vec![Metric {
            definition: MetricDefinition {
                id: "m".into(),
                name: "m".into(),
                desc: String::new(),
                unit: "%".into(),
                min: 0.0,
                max: 100.0,
                default: 0.0,
                inverse: false,
            },
            value: Some("75".into()),
        }];
        let analysis = analyze(&state, &RecommendationTable::standard());
        assert_eq!(analysis.characteristics[0].score, 75);
    }
}
