//! Sample data generation engine for the schema-sample framework.
//!
//! This crate provides the [`Generator`], which walks a parsed JSON Schema
//! document in a single depth-first pass and produces a structurally
//! isomorphic `serde_json::Value` tree of synthetic data. A seeded RNG
//! makes output reproducible across runs with the same seed and schema.
//!
//! # Architecture
//!
//! ```text
//! schema document (serde_json::Value)
//!        │
//!        ▼
//! ┌─────────────────────┐      ┌──────────────────┐
//! │  Generator          │─────▶│  PluginRegistry  │
//! │                     │      │  (directives)    │
//! │  - type dispatch    │      └──────────────────┘
//! │  - $ref resolution  │
//! │  - rng (StdRng)     │
//! └─────────┬───────────┘
//!           │ per-type builders
//!           ▼
//!   sample value tree (serde_json::Value)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sample_generator::{Generator, GeneratorOptions};
//! use sample_plugins::PluginRegistry;
//!
//! let document = serde_json::json!({
//!     "type": "object",
//!     "properties": {
//!         "age": {"type": "integer", "minimum": 0, "maximum": 120}
//!     }
//! });
//!
//! let registry = PluginRegistry::from_module_names(["report"]).unwrap();
//! let options = GeneratorOptions { seed: Some(42), ..Default::default() };
//! let mut generator = Generator::new(&document, &registry, options);
//! let sample = generator.generate().unwrap();
//! assert!(sample["age"].is_i64());
//! ```

pub mod builders;
pub mod error;
pub mod generator;

// Re-exports for convenience
pub use error::GenerateError;
pub use generator::{Generator, GeneratorOptions};
