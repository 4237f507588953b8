//! Step 2: assign integer percentage weights.

use crate::core::{CharacteristicId, ProjectState};
use crate::errors::{Error, Result};

/// Weights of the selected characteristics must add up to this.
pub const REQUIRED_TOTAL: i64 = 100;

/// Parse weight text the way a lenient integer field does.
///
/// Empty input means 0. Otherwise leading whitespace is skipped, an optional
/// sign and at least one digit are required, and anything after the digits
/// is ignored (`"12%"` is 12, `"7.9"` is 7).
pub fn parse_weight_input(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return Some(0);
    }

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Store a weight from raw field text.
///
/// Non-numeric input is rejected and leaves the state unchanged. Accepted
/// values are stored as-is; only the total is checked, at the Plan gate.
pub fn set_weight(state: &mut ProjectState, id: CharacteristicId, raw: &str) -> Result<i64> {
    let weight = parse_weight_input(raw)
        .ok_or_else(|| Error::invalid_number(format!("weight of {}", id), raw))?;
    state.characteristic_mut(id).weight = weight;
    Ok(weight)
}

/// Split [`REQUIRED_TOTAL`] into `n` parts differing by at most one,
/// with the larger parts first.
pub fn even_split(n: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    let count = n as i64;
    let base = REQUIRED_TOTAL / count;
    let remainder = (REQUIRED_TOTAL % count) as usize;
    (0..n).map(|i| base + i64::from(i < remainder)).collect()
}

/// Whether leaving the Define step should pre-fill weights.
///
/// Requires a selection mode to be set and at least one selected
/// characteristic still weighted exactly 0.
pub fn needs_auto_distribution(state: &ProjectState) -> bool {
    state.selected_scenario.is_some() && state.selected().any(|c| c.weight == 0)
}

/// Distribute 100 evenly over the selected characteristics.
///
/// The first `100 mod n` selected characteristics in display order get the
/// extra point. Returns false (and changes nothing) when not needed.
pub fn auto_distribute(state: &mut ProjectState) -> bool {
    if !needs_auto_distribution(state) {
        return false;
    }

    let shares = even_split(state.selected_count());
    let selected = state
        .characteristics_mut()
        .iter_mut()
        .filter(|c| c.selected);
    for (characteristic, share) in selected.zip(shares) {
        characteristic.weight = share;
    }

    tracing::info!(
        selected = state.selected_count(),
        total = state.total_weight(),
        "Weights distributed evenly"
    );
    true
}
