//! Recursive type-dispatch generator.
//!
//! Generation is one top-down depth-first walk starting at the document
//! root. Every node is dispatched by its declared `type` (default
//! `object`) to a per-type builder; builders either delegate to a plugin
//! function named by the node's directive or synthesize a default value
//! from the node's constraints. Authoring gaps are logged and skipped;
//! structural problems abort the walk with a [`GenerateError`].

use crate::builders::{format, numeric, string};
use crate::error::GenerateError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sample_core::{resolve_local, FunctionDirective, SchemaNode};
use sample_plugins::{PluginContext, PluginRegistry};
use serde_json::{Map, Value};

/// Options controlling one generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Clamp on generated array item counts; 0 means no limit
    pub max_array_items: u64,

    /// RNG seed for reproducible output; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

/// Sample data generator walking one schema document.
///
/// Holds the immutable root document (for `$ref` resolution), the plugin
/// registry, the per-run plugin context, and a seeded RNG. Reusing one
/// generator for several runs keeps advancing the same RNG and counters;
/// create a fresh generator for independent runs.
pub struct Generator<'a> {
    document: &'a Value,
    registry: &'a PluginRegistry,
    context: PluginContext,
    rng: StdRng,
    max_array_items: u64,
}

impl<'a> Generator<'a> {
    /// Create a generator over a parsed schema document.
    pub fn new(
        document: &'a Value,
        registry: &'a PluginRegistry,
        options: GeneratorOptions,
    ) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self {
            document,
            registry,
            // plugin draws are decorrelated from builder draws
            context: PluginContext::new(seed.wrapping_add(0x9E3779B97F4A7C15)),
            rng: StdRng::seed_from_u64(seed),
            max_array_items: options.max_array_items,
        }
    }

    /// Generate one sample tree for the whole document.
    pub fn generate(&mut self) -> Result<Value, GenerateError> {
        let document = self.document;
        self.build_node(document)
    }

    /// Dispatch a node by its declared type, defaulting to `object`.
    fn build_node(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let type_name = SchemaNode::new(node).declared_type().unwrap_or("object");
        self.build_typed(type_name, node)
    }

    fn build_typed(&mut self, type_name: &str, node: &'a Value) -> Result<Value, GenerateError> {
        match type_name {
            "object" => self.build_object(node),
            "array" => self.build_array(node),
            "string" => self.build_string(node),
            "integer" => self.build_integer(node),
            "number" => self.build_number(node),
            "boolean" => self.build_boolean(node),
            "null" => self.build_null(node),
            "anyOf" => self.build_any_of(node),
            "oneOf" => self.build_one_of(node),
            other => Err(GenerateError::UnsupportedType(other.to_string())),
        }
    }

    /// Resolve a `$ref` and generate from its target.
    ///
    /// Returns `Ok(None)` for references the engine does not support
    /// (anything non-local); those produce no value but never abort.
    fn build_ref(&mut self, reference: &str) -> Result<Option<Value>, GenerateError> {
        match resolve_local(self.document, reference)? {
            Some(target) => Ok(Some(self.build_node(target)?)),
            None => {
                tracing::warn!("Reference '{}' is not local and not supported", reference);
                Ok(None)
            }
        }
    }

    fn build_object(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let mut object = Map::new();
        if let Some(properties) = SchemaNode::new(node).properties() {
            for (name, child) in properties {
                match SchemaNode::new(child).property_dispatch_type() {
                    Some(type_name) => {
                        tracing::debug!("Processing property '{}' as '{}'", name, type_name);
                        object.insert(name.clone(), self.build_typed(type_name, child)?);
                    }
                    None => {
                        tracing::warn!("Property '{}' has no 'type' specification, ignored", name);
                    }
                }
            }
        }
        Ok(Value::Object(object))
    }

    fn build_array(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let schema_node = SchemaNode::new(node);
        let min_items = schema_node.min_items().unwrap_or(0);
        let mut max_items = schema_node.max_items().unwrap_or(u64::MAX);
        if self.max_array_items > 0 {
            max_items = max_items.min(self.max_array_items);
        }
        if min_items > max_items {
            return Err(GenerateError::invalid_bounds(
                "array item",
                min_items,
                max_items,
            ));
        }

        let count = self.rng.gen_range(min_items..=max_items);
        let mut items = Vec::new();
        match schema_node.items_ref() {
            Some(reference) => {
                for _ in 0..count {
                    if let Some(item) = self.build_ref(reference)? {
                        items.push(item);
                    }
                }
            }
            None => {
                if count > 0 {
                    tracing::warn!(
                        "Array 'items' without a '$ref' is not supported, no items generated"
                    );
                }
            }
        }
        Ok(Value::Array(items))
    }

    fn build_string(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let schema_node = SchemaNode::new(node);
        if let Some(directive) = schema_node.directive() {
            return Ok(self.invoke_plugin(&directive));
        }
        if let Some(format) = schema_node.format() {
            return Ok(format::for_name(format));
        }
        if let Some(values) = schema_node.enum_values() {
            return match string::pick_enum(&mut self.rng, values) {
                Some(value) => Ok(value),
                None => {
                    tracing::warn!("Empty 'enum' list, emitting null");
                    Ok(Value::Null)
                }
            };
        }
        string::random_string(&mut self.rng, &schema_node)
    }

    fn build_integer(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let schema_node = SchemaNode::new(node);
        if let Some(directive) = schema_node.directive() {
            return Ok(self.invoke_plugin(&directive));
        }
        numeric::random_integer(&mut self.rng, &schema_node)
    }

    fn build_number(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let schema_node = SchemaNode::new(node);
        if let Some(directive) = schema_node.directive() {
            return Ok(self.invoke_plugin(&directive));
        }
        numeric::random_number(&mut self.rng, &schema_node)
    }

    fn build_boolean(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        if let Some(directive) = SchemaNode::new(node).directive() {
            return Ok(self.invoke_plugin(&directive));
        }
        Ok(Value::Bool(self.rng.gen()))
    }

    fn build_null(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        if let Some(directive) = SchemaNode::new(node).directive() {
            return Ok(self.invoke_plugin(&directive));
        }
        Ok(Value::Null)
    }

    /// Pick one `anyOf` alternative and generate through its `$ref`.
    fn build_any_of(&mut self, node: &'a Value) -> Result<Value, GenerateError> {
        let alternatives = SchemaNode::new(node)
            .any_of()
            .ok_or(GenerateError::MissingAlternatives("anyOf"))?;

        let alternative = alternatives
            .choose(&mut self.rng)
            .ok_or(GenerateError::MissingAlternatives("anyOf"))?;
        let reference = alternative
            .get("$ref")
            .and_then(Value::as_str)
            .ok_or(GenerateError::InlineAlternative("anyOf"))?;
        Ok(self.build_ref(reference)?.unwrap_or(Value::Null))
    }

    fn build_one_of(&mut self, _node: &'a Value) -> Result<Value, GenerateError> {
        tracing::warn!("'oneOf' generation is not implemented, emitting null");
        Ok(Value::Null)
    }

    fn invoke_plugin(&mut self, directive: &FunctionDirective) -> Value {
        self.registry
            .invoke(&mut self.context, &directive.name, directive.args.as_deref())
    }
}
