//! Local `$ref` resolution.
//!
//! Only the restricted pointer form `#/<section>/<name>` is supported,
//! resolved against the root schema document (e.g. `#/definitions/Foo`).
//! External references (anything not starting with `#`) are reported as
//! unsupported by returning `None`; a malformed or dangling local pointer
//! is an error, since it leaves the document uninterpretable.

use serde_json::Value;

/// Error type for reference resolution.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Pointer does not have exactly two path segments under the root
    #[error("malformed local reference '{0}': expected '#/<section>/<name>'")]
    Malformed(String),

    /// A path segment does not exist in the document
    #[error("reference '{reference}' does not resolve: no key '{segment}'")]
    Unresolved { reference: String, segment: String },
}

/// Resolve a local reference against the root document.
///
/// Returns `Ok(None)` for non-local references, which callers surface as a
/// diagnostic rather than an error.
pub fn resolve_local<'a>(
    document: &'a Value,
    reference: &str,
) -> Result<Option<&'a Value>, ReferenceError> {
    if !reference.starts_with('#') {
        return Ok(None);
    }

    let segments: Vec<&str> = reference.split('/').collect();
    if segments.len() != 3 {
        return Err(ReferenceError::Malformed(reference.to_string()));
    }

    let mut target = document;
    for segment in &segments[1..] {
        target = target
            .get(segment)
            .ok_or_else(|| ReferenceError::Unresolved {
                reference: reference.to_string(),
                segment: segment.to_string(),
            })?;
    }
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "definitions": {
                "Foo": {"type": "boolean"}
            }
        })
    }

    #[test]
    fn test_resolves_two_level_pointer() {
        let document = document();
        let target = resolve_local(&document, "#/definitions/Foo")
            .unwrap()
            .expect("local reference should resolve");
        assert_eq!(target, &json!({"type": "boolean"}));
    }

    #[test]
    fn test_external_reference_unsupported() {
        let document = document();
        let resolved = resolve_local(&document, "http://example.com/schema#/definitions/Foo");
        assert_eq!(resolved, Ok(None));
    }

    #[test]
    fn test_short_pointer_is_malformed() {
        let document = document();
        assert!(matches!(
            resolve_local(&document, "#/definitions"),
            Err(ReferenceError::Malformed(_))
        ));
    }

    #[test]
    fn test_deep_pointer_is_malformed() {
        let document = document();
        assert!(matches!(
            resolve_local(&document, "#/definitions/Foo/type"),
            Err(ReferenceError::Malformed(_))
        ));
    }

    #[test]
    fn test_dangling_pointer_is_unresolved() {
        let document = document();
        let result = resolve_local(&document, "#/definitions/Bar");
        assert_eq!(
            result,
            Err(ReferenceError::Unresolved {
                reference: "#/definitions/Bar".to_string(),
                segment: "Bar".to_string(),
            })
        );
    }
}
