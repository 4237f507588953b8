//! Min/max normalization of raw metric values onto a 0-100 scale.

use crate::core::{Metric, MetricDefinition};
use serde::Serialize;

/// Score given to a metric whose range is degenerate (`min >= max`).
pub const DEGENERATE_RANGE_SCORE: u32 = 100;

/// Clamp a raw value into the metric's `[min, max]` range.
pub fn clamp_to_range(value: f64, definition: &MetricDefinition) -> f64 {
    value.max(definition.min).min(definition.max)
}

/// Normalized score of a single metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    /// Effective raw value before clamping.
    pub raw: f64,
    pub clamped: f64,
    pub score: u32,
    pub inverse: bool,
    /// True when the range was unusable and the fallback score applied.
    pub degenerate: bool,
}

/// Map a value already clamped into `[min, max]` onto 0-100.
///
/// Inverse metrics score higher the closer they are to `min`.
pub fn normalize(clamped: f64, definition: &MetricDefinition) -> Option<u32> {
    if !definition.has_valid_range() {
        return None;
    }
    let span = definition.max - definition.min;
    let ratio = if definition.inverse {
        (definition.max - clamped) / span
    } else {
        (clamped - definition.min) / span
    };
    Some((ratio * 100.0).round() as u32)
}

/// Score a metric from its effective value.
pub fn score_metric(metric: &Metric) -> MetricScore {
    let definition = &metric.definition;
    let raw = metric.effective_value();
    let clamped = clamp_to_range(raw, definition);
    let (score, degenerate) = match normalize(clamped, definition) {
        Some(score) => (score, false),
        None => (DEGENERATE_RANGE_SCORE, true),
    };

    MetricScore {
        id: definition.id.clone(),
        name: definition.name.clone(),
        unit: definition.unit.clone(),
        min: definition.min,
        max: definition.max,
        raw,
        clamped,
        score,
        inverse: definition.inverse,
        degenerate,
    }
}

/// Rounded mean of metric scores; 0 when there are none.
pub fn average_score(scores: &[MetricScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().map(|s| s.score).sum();
    (f64::from(total) / scores.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_metric(inverse: bool, value: Option<&str>) -> Metric {
        Metric {
            definition: MetricDefinition {
                id: "m".into(),
                name: "Percent".into(),
                desc: String::new(),
                unit: "%".into(),
                min: 0.0,
                max: 100.0,
                default: 50.0,
                inverse,
            },
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_direct_metric_scores_its_position() {
        assert_eq!(score_metric(&percent_metric(false, Some("75"))).score, 75);
    }

    #[test]
    fn test_inverse_metric_scores_distance_from_max() {
        assert_eq!(score_metric(&percent_metric(true, Some("75"))).score, 25);
    }

    #[test]
    fn test_values_clamp_before_scoring() {
        let high = score_metric(&percent_metric(false, Some("150")));
        assert_eq!(high.clamped, 100.0);
        assert_eq!(high.score, 100);
        assert_eq!(high.raw, 150.0);

        let low = score_metric(&percent_metric(false, Some("-20")));
        assert_eq!(low.score, 0);
    }

    #[test]
    fn test_default_used_without_override() {
        assert_eq!(score_metric(&percent_metric(false, None)).score, 50);
        assert_eq!(score_metric(&percent_metric(false, Some(""))).score, 50);
    }

    #[test]
    fn test_rounding_of_fractional_scores() {
        let metric = Metric::from(MetricDefinition {
            id: "m_perf_1".into(),
            name: "Mean Response Time".into(),
            desc: String::new(),
            unit: "ms".into(),
            min: 0.0,
            max: 5000.0,
            default: 200.0,
            inverse: true,
        });
        // 100 * 4800 / 5000 = 96
        assert_eq!(score_metric(&metric).score, 96);

        let mut availability = percent_metric(false, Some("99.5"));
        availability.definition.inverse = false;
        assert_eq!(score_metric(&availability).score, 100);
    }

    #[test]
    fn test_degenerate_range_falls_back() {
        let mut metric = percent_metric(false, Some("5"));
        metric.definition.min = 5.0;
        metric.definition.max = 5.0;
        let scored = score_metric(&metric);
        assert!(scored.degenerate);
        assert_eq!(scored.score, DEGENERATE_RANGE_SCORE);
    }

    #[test]
    fn test_average_score() {
        let a = score_metric(&percent_metric(false, Some("96")));
        let b = score_metric(&percent_metric(false, Some("55")));
        assert_eq!(average_score(&[a, b]), 76);
        assert_eq!(average_score(&[]), 0);
    }
}
