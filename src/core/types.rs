use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight ISO 25010 product quality characteristics.
///
/// The set is closed: every [`ProjectState`](super::ProjectState) carries
/// exactly one record per variant, in the order of [`CharacteristicId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacteristicId {
    #[serde(rename = "func")]
    FunctionalSuitability,
    #[serde(rename = "perf")]
    PerformanceEfficiency,
    #[serde(rename = "comp")]
    Compatibility,
    #[serde(rename = "usab")]
    Usability,
    #[serde(rename = "rel")]
    Reliability,
    #[serde(rename = "sec")]
    Security,
    #[serde(rename = "maint")]
    Maintainability,
    #[serde(rename = "port")]
    Portability,
}

impl CharacteristicId {
    /// All characteristics in display order.
    pub const ALL: [CharacteristicId; 8] = [
        Self::FunctionalSuitability,
        Self::PerformanceEfficiency,
        Self::Compatibility,
        Self::Usability,
        Self::Reliability,
        Self::Security,
        Self::Maintainability,
        Self::Portability,
    ];

    /// Short stable key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FunctionalSuitability => "func",
            Self::PerformanceEfficiency => "perf",
            Self::Compatibility => "comp",
            Self::Usability => "usab",
            Self::Reliability => "rel",
            Self::Security => "sec",
            Self::Maintainability => "maint",
            Self::Portability => "port",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FunctionalSuitability => "Functional Suitability",
            Self::PerformanceEfficiency => "Performance Efficiency",
            Self::Compatibility => "Compatibility",
            Self::Usability => "Usability",
            Self::Reliability => "Reliability",
            Self::Security => "Security",
            Self::Maintainability => "Maintainability",
            Self::Portability => "Portability",
        }
    }

    /// Position in display order.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|id| id == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for CharacteristicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CharacteristicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == key)
            .ok_or_else(|| {
                format!(
                    "unknown characteristic '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|id| id.key()).join(", ")
                )
            })
    }
}

/// Static description of a measurable metric, as found in the metric library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Lower raw values are better.
    #[serde(default)]
    pub inverse: bool,
}

impl MetricDefinition {
    /// True when `min < max` and both bounds are finite.
    pub fn has_valid_range(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// A metric loaded into a characteristic, with the user's raw override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(flatten)]
    pub definition: MetricDefinition,
    /// Raw text as typed by the user; kept verbatim until scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Metric {
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// Override if present and non-empty, else the library default.
    ///
    /// Not clamped; clamping happens at scoring time.
    pub fn effective_value(&self) -> f64 {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|v| !v.is_nan())
            .unwrap_or(self.definition.default)
    }

    /// Text an input field shows for this metric.
    pub fn display_value(&self) -> String {
        match &self.value {
            Some(raw) => raw.clone(),
            None => format_number(self.definition.default),
        }
    }
}

impl From<MetricDefinition> for Metric {
    fn from(definition: MetricDefinition) -> Self {
        Self {
            definition,
            value: None,
        }
    }
}

/// One ISO 25010 characteristic inside the project state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: CharacteristicId,
    pub name: String,
    pub selected: bool,
    /// Integer percentage; only meaningful while selected.
    pub weight: i64,
    pub metrics: Vec<Metric>,
}

impl Characteristic {
    pub fn new(id: CharacteristicId) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            selected: false,
            weight: 0,
            metrics: Vec::new(),
        }
    }

    pub fn metric(&self, metric_id: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.id() == metric_id)
    }

    pub fn metric_mut(&mut self, metric_id: &str) -> Option<&mut Metric> {
        self.metrics.iter_mut().find(|m| m.id() == metric_id)
    }
}

/// Predefined case studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Iot,
    Health,
    Mobile,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] = [Self::Iot, Self::Health, Self::Mobile];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Iot => "iot",
            Self::Health => "health",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == key)
            .ok_or_else(|| format!("unknown scenario '{}' (expected iot, health or mobile)", s))
    }
}

/// How the current characteristic selection came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSelection {
    Preset(ScenarioId),
    /// The user toggled characteristics by hand.
    Custom,
}

impl ScenarioSelection {
    pub fn preset(&self) -> Option<ScenarioId> {
        match self {
            Self::Preset(id) => Some(*id),
            Self::Custom => None,
        }
    }
}

/// Formats a number the way a text field shows it: no trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
