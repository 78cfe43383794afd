//! Typed accessors over a single schema node.
//!
//! A node is any sub-mapping of the parsed schema document that describes
//! one value to generate. Nodes are not deserialized into structs: almost
//! every attribute is optional, unknown keys must be ignored, and child
//! nodes have to stay borrowable from the immutable root document for
//! reference resolution. [`SchemaNode`] is a thin borrowing wrapper that
//! gives the builders typed views of the attributes they consume.

use crate::directive::FunctionDirective;
use serde_json::{Map, Value};

/// Borrowing view of one schema node.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    raw: &'a Value,
}

impl<'a> SchemaNode<'a> {
    /// Wrap a parsed schema value.
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// The underlying JSON value.
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key)
    }

    /// The node's declared `type`, if any.
    pub fn declared_type(&self) -> Option<&'a str> {
        self.get("type").and_then(Value::as_str)
    }

    /// The type an object property is dispatched as.
    ///
    /// Composition keys override a declared `type`, and `oneOf` wins when
    /// both are present. Returns `None` when no type can be determined,
    /// which callers treat as a skip-with-diagnostic case.
    pub fn property_dispatch_type(&self) -> Option<&'a str> {
        if self.get("oneOf").is_some() {
            Some("oneOf")
        } else if self.get("anyOf").is_some() {
            Some("anyOf")
        } else {
            self.declared_type()
        }
    }

    /// The node's generation directive, if any.
    ///
    /// An explicit `function` key wins over a directive embedded in the
    /// `description`.
    pub fn directive(&self) -> Option<FunctionDirective> {
        if let Some(function) = self.get("function").and_then(Value::as_str) {
            return Some(FunctionDirective::parse(function));
        }
        self.get("description")
            .and_then(Value::as_str)
            .and_then(FunctionDirective::from_description)
    }

    /// The `properties` mapping of an object node.
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.get("properties").and_then(Value::as_object)
    }

    /// The `items` node of an array node.
    pub fn items(&self) -> Option<&'a Value> {
        self.get("items")
    }

    /// The `$ref` string inside an array node's `items`, if that is the
    /// form the schema uses.
    pub fn items_ref(&self) -> Option<&'a str> {
        self.items()?.get("$ref").and_then(Value::as_str)
    }

    /// The node's `enum` candidate list.
    pub fn enum_values(&self) -> Option<&'a [Value]> {
        self.get("enum").and_then(Value::as_array).map(Vec::as_slice)
    }

    /// The node's `anyOf` alternative list.
    pub fn any_of(&self) -> Option<&'a [Value]> {
        self.get("anyOf")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// The node's `format` name.
    pub fn format(&self) -> Option<&'a str> {
        self.get("format").and_then(Value::as_str)
    }

    /// `minLength` constraint.
    pub fn min_length(&self) -> Option<i64> {
        self.get("minLength").and_then(value_as_i64)
    }

    /// `maxLength` constraint.
    pub fn max_length(&self) -> Option<i64> {
        self.get("maxLength").and_then(value_as_i64)
    }

    /// `minimum` constraint as an integer.
    pub fn minimum_i64(&self) -> Option<i64> {
        self.get("minimum").and_then(value_as_i64)
    }

    /// `maximum` constraint as an integer.
    pub fn maximum_i64(&self) -> Option<i64> {
        self.get("maximum").and_then(value_as_i64)
    }

    /// `minimum` constraint as a float.
    pub fn minimum_f64(&self) -> Option<f64> {
        self.get("minimum").and_then(value_as_f64)
    }

    /// `maximum` constraint as a float.
    pub fn maximum_f64(&self) -> Option<f64> {
        self.get("maximum").and_then(value_as_f64)
    }

    /// Whether the `exclusiveMinimum` flag is set.
    pub fn exclusive_minimum(&self) -> bool {
        self.get("exclusiveMinimum")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether the `exclusiveMaximum` flag is set.
    pub fn exclusive_maximum(&self) -> bool {
        self.get("exclusiveMaximum")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// `multipleOf` constraint.
    pub fn multiple_of(&self) -> Option<i64> {
        self.get("multipleOf").and_then(value_as_i64)
    }

    /// `minItems` constraint.
    pub fn min_items(&self) -> Option<u64> {
        self.get("minItems").and_then(value_as_u64)
    }

    /// `maxItems` constraint.
    pub fn max_items(&self) -> Option<u64> {
        self.get("maxItems").and_then(value_as_u64)
    }
}

// Constraint values show up both as JSON numbers and as numeric strings in
// the wild; accept either form.

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
