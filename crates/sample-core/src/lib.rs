//! Core schema types for the schema-sample framework.
//!
//! This crate provides the foundational pieces shared by the generation
//! engine and the CLI:
//!
//! - [`SchemaNode`] - Typed accessors over one node of a parsed JSON Schema
//! - [`FunctionDirective`] - Parsed `name;arg1,arg2` generation directives
//! - [`resolve_local`] - Resolution of `#/<section>/<name>` references
//!
//! # Architecture
//!
//! ```text
//! sample-core (this crate)
//!    │
//!    ├─── sample-generator  (walks nodes, resolves references)
//!    │
//!    └─── sample-plugins    (receives parsed directives)
//! ```
//!
//! The schema document itself stays a plain `serde_json::Value`; nodes are
//! wrapped on demand rather than deserialized into structs, since almost
//! every attribute is optional and unknown keys must be ignored.

pub mod directive;
pub mod node;
pub mod reference;

// Re-exports for convenience
pub use directive::FunctionDirective;
pub use node::SchemaNode;
pub use reference::{resolve_local, ReferenceError};
