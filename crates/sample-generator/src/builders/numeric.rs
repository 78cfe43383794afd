//! Integer and number value builders.

use crate::error::GenerateError;
use rand::Rng;
use sample_core::SchemaNode;
use serde_json::Value;

/// Generate a random integer honoring the node's bounds and `multipleOf`.
///
/// Missing bounds default to the full `i64` range; the boolean
/// `exclusiveMinimum`/`exclusiveMaximum` flags pull the bound 1 inward.
/// With `multipleOf` set, k is drawn uniformly over the divided bounds and
/// `k * multipleOf` is emitted, so the result is always an exact multiple.
pub fn random_integer<R: Rng>(rng: &mut R, node: &SchemaNode) -> Result<Value, GenerateError> {
    let mut min = node.minimum_i64().unwrap_or(i64::MIN);
    let mut max = node.maximum_i64().unwrap_or(i64::MAX);
    if node.exclusive_minimum() {
        min = min.saturating_add(1);
    }
    if node.exclusive_maximum() {
        max = max.saturating_sub(1);
    }

    let multiple_of = match node.multiple_of() {
        Some(m) if m > 0 => m,
        Some(m) => {
            tracing::warn!("Non-positive 'multipleOf' {} ignored", m);
            1
        }
        None => 1,
    };

    let low = min / multiple_of;
    let high = max / multiple_of;
    if low > high {
        return Err(GenerateError::invalid_bounds("integer", min, max));
    }

    Ok(Value::from(rng.gen_range(low..=high) * multiple_of))
}

/// Generate a random number in the node's bounds, emitted as a JSON number.
///
/// Missing bounds default to the smallest positive and largest
/// representable floats; exclusive flags shift the bound by 1.0.
pub fn random_number<R: Rng>(rng: &mut R, node: &SchemaNode) -> Result<Value, GenerateError> {
    let mut min = node.minimum_f64().unwrap_or(f64::MIN_POSITIVE);
    let mut max = node.maximum_f64().unwrap_or(f64::MAX);
    if node.exclusive_minimum() {
        min += 1.0;
    }
    if node.exclusive_maximum() {
        max -= 1.0;
    }
    if min > max {
        return Err(GenerateError::invalid_bounds("number", min, max));
    }

    let value = rng.gen_range(min..=max);
    Ok(serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null))
}
