//! Shared error types for qmsim.
//!
//! Library code returns [`Result`]; the binary wraps these in `anyhow`.
//! Every variant is recoverable: a rejected action leaves the prior state
//! intact and can be retried.

use crate::core::CharacteristicId;
use crate::wizard::{GateError, Step};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qmsim operations
#[derive(Debug, Error)]
pub enum Error {
    /// Raw input that is neither empty nor a number
    #[error("Invalid number for {field}: '{input}'")]
    InvalidNumber { field: String, input: String },

    /// Characteristic key not in the ISO 25010 set
    #[error("Unknown characteristic: {0}")]
    UnknownCharacteristic(String),

    /// Metric id not loaded for the characteristic
    #[error("Unknown metric '{metric}' for characteristic {characteristic}")]
    UnknownMetric {
        characteristic: CharacteristicId,
        metric: String,
    },

    /// Scenario key not among the predefined case studies
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// A step transition guard refused to advance
    #[error("{0}")]
    Gate(#[from] GateError),

    /// Update message sent while another step is active
    #[error("{expected} input is not accepted during the {current} step")]
    WrongStep { expected: Step, current: Step },

    /// Metric definition with `min >= max` or non-finite bounds
    #[error("Degenerate range for {characteristic}/{metric}: min {min} must be below max {max}")]
    DegenerateRange {
        characteristic: CharacteristicId,
        metric: String,
        min: f64,
        max: f64,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            input: input.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
