//! String value builders.

use crate::error::GenerateError;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use sample_core::SchemaNode;
use serde_json::Value;

const DEFAULT_MAX_LENGTH: i64 = 4096;

/// Generate a random alphanumeric string within the node's length bounds.
///
/// Negative or missing bounds fall back to 0 / 4096. The length is the
/// ceiling of a uniform real draw over the bounds, so single-point bounds
/// are honored exactly.
pub fn random_string<R: Rng>(rng: &mut R, node: &SchemaNode) -> Result<Value, GenerateError> {
    let min_length = node.min_length().filter(|l| *l >= 0).unwrap_or(0);
    let max_length = node
        .max_length()
        .filter(|l| *l >= 0)
        .unwrap_or(DEFAULT_MAX_LENGTH);
    if min_length > max_length {
        return Err(GenerateError::invalid_bounds(
            "string length",
            min_length,
            max_length,
        ));
    }

    let length = rng
        .gen_range(min_length as f64..=max_length as f64)
        .ceil() as usize;
    let sample: String = (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    Ok(Value::String(sample))
}

/// Pick one `enum` entry uniformly, coerced to a string.
///
/// Non-string entries are rendered as their JSON text, so numeric enums
/// still produce a string value. Returns `None` for an empty list.
pub fn pick_enum<R: Rng>(rng: &mut R, values: &[Value]) -> Option<Value> {
    let choice = values.choose(rng)?;
    let text = match choice {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_random_string_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let node = json!({"minLength": 5, "maxLength": 10});

        for _ in 0..100 {
            let value = random_string(&mut rng, &SchemaNode::new(&node)).unwrap();
            let s = value.as_str().unwrap();
            assert!((5..=10).contains(&s.len()), "bad length {}", s.len());
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_string_exact_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let node = json!({"minLength": 7, "maxLength": 7});

        let value = random_string(&mut rng, &SchemaNode::new(&node)).unwrap();
        assert_eq!(value.as_str().unwrap().len(), 7);
    }

    #[test]
    fn test_random_string_negative_bounds_use_defaults() {
        let mut rng = StdRng::seed_from_u64(42);
        let node = json!({"minLength": -3, "maxLength": 16});

        let value = random_string(&mut rng, &SchemaNode::new(&node)).unwrap();
        assert!(value.as_str().unwrap().len() <= 16);
    }

    #[test]
    fn test_random_string_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let node = json!({"minLength": 9, "maxLength": 3});

        let result = random_string(&mut rng, &SchemaNode::new(&node));
        assert!(matches!(
            result,
            Err(GenerateError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_pick_enum_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = [json!("a"), json!("b"), json!("c")];

        for _ in 0..50 {
            let value = pick_enum(&mut rng, &values).unwrap();
            assert!(["a", "b", "c"].contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_pick_enum_coerces_numbers() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = [json!(5)];

        let value = pick_enum(&mut rng, &values).unwrap();
        assert_eq!(value, json!("5"));
    }

    #[test]
    fn test_pick_enum_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pick_enum(&mut rng, &[]), None);
    }
}
