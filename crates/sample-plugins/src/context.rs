//! Per-run plugin invocation state.
//!
//! Plugin functions may carry state that persists across invocations within
//! one run, most commonly monotonically increasing ID counters. That state
//! lives here, owned by the context object injected into every call, so it
//! is resettable between runs and never leaks across them.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Named monotonic counters shared by all plugin invocations in one run.
#[derive(Debug, Default)]
pub struct CounterSet {
    counters: HashMap<String, u64>,
}

impl CounterSet {
    /// Return the current value of a counter and advance it.
    ///
    /// Counters start at 0 on first use.
    pub fn next(&mut self, key: &str) -> u64 {
        let counter = self.counters.entry(key.to_string()).or_insert(0);
        let current = *counter;
        *counter += 1;
        current
    }

    /// Reset every counter to 0.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

/// State injected into every plugin invocation.
pub struct PluginContext {
    /// Sequence counters for ID-style generators
    pub counters: CounterSet,
    seed: u64,
    rng: StdRng,
}

impl PluginContext {
    /// Create a context whose RNG is seeded for reproducible output.
    pub fn new(seed: u64) -> Self {
        Self {
            counters: CounterSet::default(),
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The RNG for plugin functions that draw random values.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Reset counters and re-seed the RNG, as if starting a fresh run.
    pub fn reset(&mut self) {
        self.counters.reset();
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
