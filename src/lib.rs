//! schema-sample library
//!
//! Generates a synthetic sample document conforming to a JSON Schema file.
//! Schema authors can delegate individual fields to named plugin functions
//! via `function` keys or `>>name;args<<` directives embedded in
//! descriptions; everything else falls back to constraint-driven random
//! synthesis.
//!
//! # CLI Usage
//!
//! ```bash
//! # Pretty-print a sample for a schema to stdout
//! schema-sample --print device-report.json
//!
//! # Reproducible output, capped array sizes, written to a file
//! schema-sample --seed 42 --array 8 --output sample.json device-report.json
//! ```
//!
//! The binary is a thin wrapper around [`run`]; the interesting parts live
//! in the engine crates (`sample-core`, `sample-generator`,
//! `sample-plugins`).

use anyhow::Context;
use clap::Parser;
use sample_generator::{Generator, GeneratorOptions};
use sample_plugins::PluginRegistry;

/// Command-line options.
#[derive(Parser)]
#[command(name = "schema-sample")]
#[command(about = "Generate sample data from JSON Schema")]
pub struct Cli {
    /// JSON Schema file to generate sample data for
    pub schema: std::path::PathBuf,

    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// Plugin module resolving function directives - can be given more
    /// than once, earlier modules win name clashes
    #[arg(short, long, default_value = "report")]
    pub module: Vec<String>,

    /// Maximum array item count; 0 is no limit
    #[arg(short, long, default_value_t = 0)]
    pub array: u64,

    /// Print a formatted version of the generated JSON data
    #[arg(short, long)]
    pub print: bool,

    /// If present, output JSON data to this file
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// RNG seed for reproducible output
    #[arg(long, env = "SCHEMA_SAMPLE_SEED")]
    pub seed: Option<u64>,
}

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr so `--print` output stays parseable. The
/// `RUST_LOG` environment variable overrides the `--debug` toggle.
pub fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the schema, generate one sample tree, and write it out.
///
/// Returns the generated tree so callers (and tests) can inspect it.
pub fn run(cli: &Cli, registry: &PluginRegistry) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("Failed to read schema file {:?}", cli.schema))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse schema file {:?}", cli.schema))?;

    let options = GeneratorOptions {
        max_array_items: cli.array,
        seed: cli.seed,
    };
    let sample = Generator::new(&document, registry, options)
        .generate()
        .context("Schema cannot be interpreted")?;

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&sample)?);
    }

    if let Some(path) = &cli.output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file {path:?}"))?;
        serde_json::to_writer(file, &sample)
            .with_context(|| format!("Failed to write output file {path:?}"))?;
        tracing::info!("Wrote generated sample to {:?}", path);
    }

    Ok(sample)
}
