//! Radar chart payload handed to a renderer.
//!
//! The payload carries data and fixed styling only; renderers decide how
//! to draw it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarOptions {
    pub suggested_min: u32,
    pub suggested_max: u32,
    pub step_size: u32,
    pub show_ticks: bool,
    pub show_legend: bool,
    pub fill_color: &'static str,
    pub border_color: &'static str,
    pub grid_color: &'static str,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            suggested_min: 0,
            suggested_max: 100,
            step_size: 20,
            show_ticks: false,
            show_legend: false,
            fill_color: "rgba(76, 81, 191, 0.2)",
            border_color: "#4c51bf",
            grid_color: "#e2e8f0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub scores: Vec<u32>,
    pub options: RadarOptions,
}

impl RadarChart {
    pub fn new(labels: Vec<String>, scores: Vec<u32>) -> Self {
        Self {
            dataset_label: "Quality Score",
            labels,
            scores,
            options: RadarOptions::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label and score pairs in axis order.
    pub fn axes(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }
}
