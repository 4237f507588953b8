//! Step 3: load metric definitions and collect raw values.

use crate::catalog::MetricLibrary;
use crate::core::{CharacteristicId, Metric, ProjectState};
use crate::errors::{Error, Result};

/// Populate every selected characteristic whose metric list is empty.
///
/// Lists that already hold metrics are never touched, so values entered
/// earlier survive navigation and re-selection. Returns how many
/// characteristics were populated.
pub fn auto_load(state: &mut ProjectState, library: &MetricLibrary) -> usize {
    let mut loaded = 0;
    for characteristic in state
        .characteristics_mut()
        .iter_mut()
        .filter(|c| c.selected && c.metrics.is_empty())
    {
        characteristic.metrics = library
            .definitions(characteristic.id)
            .iter()
            .cloned()
            .map(Metric::from)
            .collect();
        if !characteristic.metrics.is_empty() {
            loaded += 1;
        }
        tracing::debug!(
            characteristic = %characteristic.id,
            metrics = characteristic.metrics.len(),
            "Metrics loaded from library"
        );
    }
    loaded
}

/// Whether raw metric text is acceptable: blank, or a decimal number.
///
/// Partial input such as `"1."` or `".5"` is accepted so typing is never
/// blocked halfway through a number. `"Infinity"` and literals whose
/// exponent overflows (`"1e400"`) are numbers too; clamping brings them
/// back into range when scoring.
pub fn is_numeric_input(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => false,
        Ok(v) if v.is_infinite() => {
            let unsigned = trimmed.trim_start_matches(['+', '-']);
            let literal = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
            literal || unsigned == "Infinity"
        }
        Ok(_) => true,
        Err(_) => false,
    }
}

/// Store raw text as a metric's override.
///
/// Rejected input leaves the state unchanged. Accepted text is kept
/// verbatim; conversion and clamping happen only when scoring.
pub fn set_metric_value(
    state: &mut ProjectState,
    characteristic: CharacteristicId,
    metric_id: &str,
    raw: &str,
) -> Result<()> {
    if !is_numeric_input(raw) {
        return Err(Error::invalid_number(
            format!("{}/{}", characteristic, metric_id),
            raw,
        ));
    }

    let metric = state
        .characteristic_mut(characteristic)
        .metric_mut(metric_id)
        .ok_or_else(|| Error::UnknownMetric {
            characteristic,
            metric: metric_id.to_string(),
        })?;
    metric.value = Some(raw.to_string());
    Ok(())
}
