//! Command-line interface for schema-sample
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate and pretty-print a sample document
//! schema-sample --print device-report.json
//!
//! # Use extra plugin modules and cap arrays at 16 items
//! schema-sample -m report -a 16 --output sample.json device-report.json
//! ```

use clap::Parser;
use sample_plugins::{PluginError, PluginRegistry};
use schema_sample::{init_tracing, run, Cli};

/// Exit code for a plugin module that cannot be resolved at startup.
const EXIT_UNKNOWN_MODULE: i32 = 100;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Module resolution happens before any generation; a bad module name
    // aborts with its own exit code.
    let registry = match PluginRegistry::from_module_names(&cli.module) {
        Ok(registry) => registry,
        Err(e @ PluginError::UnknownModule(_)) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_UNKNOWN_MODULE);
        }
    };

    if let Err(e) = run(&cli, &registry) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
