//! Scoring of a finished measurement.
//!
//! - [`score_normalizer`]: raw value → 0-100 metric score
//! - [`analyzer`]: characteristic averages, weighted overall score, advice
//! - [`rating`]: rating bands and gap severities
//! - [`chart`]: radar chart payload

pub mod analyzer;
pub mod chart;
pub mod rating;
pub mod score_normalizer;

pub use analyzer::{
    analyze, overall_score, recommend, score_characteristic, Advice, Analysis,
    CharacteristicScore, Recommendation, ScoringIssue,
};
pub use chart::{RadarChart, RadarOptions};
pub use rating::{Gap, GapSeverity, Rating};
pub use score_normalizer::{score_metric, MetricScore};
