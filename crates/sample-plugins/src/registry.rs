//! Plugin module registry and function dispatch.
//!
//! Modules are compiled-in descriptors exposing named functions. The
//! registry resolves the configured module names once at startup and builds
//! an explicit name → function map; when several modules expose the same
//! name, the first registered module wins. A missing function at generation
//! time is not fatal: the caller gets a visible failure marker instead.

use crate::context::PluginContext;
use serde_json::Value;
use std::collections::HashMap;

/// Signature of a plugin function.
///
/// Receives the per-run context plus the directive's argument list and
/// returns an opaque value the generator inserts as-is.
pub type PluginFn = fn(&mut PluginContext, Option<&[String]>) -> Value;

/// A compiled-in plugin module: a name plus its exported functions.
pub struct PluginModule {
    /// Module name used by the `--module` flag
    pub name: &'static str,

    /// Exported functions, keyed by directive name
    pub functions: &'static [(&'static str, PluginFn)],
}

/// Error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Configured module name does not match any compiled-in module
    #[error("unknown plugin module '{0}'")]
    UnknownModule(String),
}

/// All modules shipped with the binary.
pub static BUILTIN_MODULES: &[&PluginModule] = &[&crate::report::MODULE];

/// Name → function map resolved from an ordered list of plugin modules.
pub struct PluginRegistry {
    functions: HashMap<String, PluginFn>,
}

impl PluginRegistry {
    /// Build a registry from module descriptors, in registration order.
    pub fn from_modules<'a, I>(modules: I) -> Self
    where
        I: IntoIterator<Item = &'a PluginModule>,
    {
        let mut functions = HashMap::new();
        for module in modules {
            for (name, function) in module.functions {
                // First registered module wins.
                functions.entry(name.to_string()).or_insert(*function);
            }
        }
        Self { functions }
    }

    /// Build a registry by resolving module names against the compiled-in
    /// module set. Order is preserved; an unknown name is a startup error.
    pub fn from_module_names<I, S>(names: I) -> Result<Self, PluginError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut modules = Vec::new();
        for name in names {
            let name = name.as_ref();
            let module = BUILTIN_MODULES
                .iter()
                .find(|m| m.name == name)
                .ok_or_else(|| PluginError::UnknownModule(name.to_string()))?;
            modules.push(*module);
        }
        Ok(Self::from_modules(modules))
    }

    /// Look up a function by directive name.
    pub fn resolve(&self, name: &str) -> Option<PluginFn> {
        self.functions.get(name).copied()
    }

    /// Invoke a function by name.
    ///
    /// A name no module exposes yields a visible failure marker so partial
    /// output generation can continue.
    pub fn invoke(
        &self,
        context: &mut PluginContext,
        name: &str,
        args: Option<&[String]>,
    ) -> Value {
        match self.resolve(name) {
            Some(function) => function(context, args),
            None => {
                tracing::warn!(function = name, "plugin function not found in any module");
                Value::String(format!("***FAILED {name}"))
            }
        }
    }
}
