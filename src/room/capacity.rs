//! Capacity validation for untyped input
//!
//! The CLI, scripts and JSON callers hand us capacities as text or dynamic
//! values. Anything that is not a non-negative integer is rejected with
//! [`RoomError::InvalidCapacity`] carrying the literal.

use serde_json::Value;
use tracing::debug;

use crate::error::{RoomError, Result};

/// Parse a capacity literal such as `"3"`, `"3.0"` or `"1e2"`
pub fn parse_capacity(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();

    if let Ok(n) = trimmed.parse::<usize>() {
        return Ok(n);
    }

    // Integral floats ("3.0", "1e2", "-0") are integers too
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(integral_capacity)
        .ok_or_else(|| reject(raw))
}

/// Validate a dynamic JSON value as a capacity
pub fn capacity_from_json(value: &Value) -> Result<usize> {
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .or_else(|| n.as_f64().and_then(integral_capacity)),
        _ => None,
    };

    parsed.ok_or_else(|| reject(&value.to_string()))
}

/// Largest integer an f64 holds exactly (2^53 - 1)
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

fn integral_capacity(n: f64) -> Option<usize> {
    // Above 2^53 the literal may already have been rounded
    if n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n <= MAX_EXACT_FLOAT {
        usize::try_from(n as u64).ok()
    } else {
        None
    }
}

fn reject(literal: &str) -> RoomError {
    debug!(capacity = %literal, "rejected capacity");
    RoomError::InvalidCapacity(literal.to_string())
}
