//! Plugin function registry for the schema-sample generator.
//!
//! Schema authors delegate individual fields to named functions via
//! directives like `swVer;armitem`. This crate provides:
//!
//! - [`PluginRegistry`] - name → function map built once at startup from an
//!   ordered list of modules, first registered module wins
//! - [`PluginContext`] - per-run state injected into every invocation:
//!   named counters for sequential IDs plus a seeded RNG
//! - [`report`] - the built-in module of example generators
//!
//! # Example
//!
//! ```rust
//! use sample_plugins::{PluginContext, PluginRegistry};
//!
//! let registry = PluginRegistry::from_module_names(["report"]).unwrap();
//! let mut context = PluginContext::new(42);
//!
//! let args = vec!["armitem".to_string()];
//! let value = registry.invoke(&mut context, "swVer", Some(&args));
//! assert_eq!(value, serde_json::json!("sw-arm-v1.2"));
//! ```

pub mod context;
pub mod registry;
pub mod report;

// Re-exports for convenience
pub use context::{CounterSet, PluginContext};
pub use registry::{PluginError, PluginFn, PluginModule, PluginRegistry};
