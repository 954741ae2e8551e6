// MIT License
//
// Copyright (c) 2024 Gregory Meyer
//
// Permission is hereby granted, free of charge, to any person
// obtaining a copy of this software and associated documentation files
// (the "Software"), to deal in the Software without restriction,
// including without limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS
// BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN
// ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Benchmark driver: fills tables with generated keys, times insertion and
//! lookup passes, and collects the table's counters.

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    keys::KeyGenerator,
    record::Record,
    strategy::{HashStrategy, StrategyKind},
    table::HashTable,
};

/// Parameters for a benchmark suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub capacities: Vec<usize>,
    pub key_counts: Vec<usize>,
    pub strategies: Vec<StrategyKind>,
    pub seed: u64,
    /// Number of full lookup passes averaged per run.
    pub search_rounds: u32,
}

impl Default for BenchConfig {
    fn default() -> BenchConfig {
        BenchConfig {
            capacities: vec![10, 100, 1_000, 10_000, 100_000],
            key_counts: vec![1_000_000, 5_000_000, 20_000_000],
            strategies: StrategyKind::ALL.to_vec(),
            seed: 12345,
            search_rounds: 5,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacities.is_empty() {
            return Err(invalid("at least one capacity is required"));
        }

        if let Some(&capacity) = self.capacities.iter().find(|&&c| c == 0) {
            return Err(Error::Configuration { capacity });
        }

        if self.key_counts.is_empty() {
            return Err(invalid("at least one key count is required"));
        }

        if self.key_counts.contains(&0) {
            return Err(invalid("key counts must be positive"));
        }

        if self.strategies.is_empty() {
            return Err(invalid("at least one strategy is required"));
        }

        if self.search_rounds == 0 {
            return Err(invalid("search rounds must be positive"));
        }

        Ok(())
    }

    /// Total number of runs the suite will perform.
    pub fn num_runs(&self) -> usize {
        self.capacities.len() * self.key_counts.len() * self.strategies.len()
    }
}

/// The measured outcome of one run, in the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub capacity: usize,
    #[serde(rename = "hashFunctionName")]
    pub strategy: String,
    #[serde(rename = "keyCount")]
    pub key_count: usize,
    #[serde(rename = "insertionTimeNs")]
    pub insertion_ns: u64,
    #[serde(rename = "avgSearchTimeNs")]
    pub avg_search_ns: u64,
    pub collisions: u64,
    /// Comparisons made by a single lookup pass over every key.
    pub comparisons: u64,
    #[serde(skip)]
    pub insert_comparisons: u64,
    #[serde(skip)]
    pub longest_chain: usize,
}

/// Runs one benchmark: inserts every record into a fresh table, then looks
/// every record up `search_rounds` times.
///
/// The comparison counter is reset before each lookup pass, so
/// `comparisons` in the result reflects one pass. Every lookup must find its
/// record; a miss is reported as [`Error::MissingKey`].
pub fn run_one<S: HashStrategy + 'static>(
    capacity: usize,
    strategy: S,
    records: &[Record],
    search_rounds: u32,
) -> Result<RunResult> {
    if search_rounds == 0 {
        return Err(invalid("search rounds must be positive"));
    }

    let name = strategy.name().to_string();
    let mut table = HashTable::with_strategy(capacity, strategy)?;
    let batch = records.to_vec();

    let start = Instant::now();
    for record in batch {
        table.insert(record)?;
    }
    let insertion = start.elapsed();
    let insert_comparisons = table.comparisons();

    debug!(
        "{} distinct of {} keys stored, longest chain {}",
        table.len(),
        records.len(),
        table.longest_chain()
    );

    let mut searching = Duration::ZERO;
    let mut comparisons = 0;

    for _ in 0..search_rounds {
        table.reset_comparisons();

        let start = Instant::now();
        for record in records {
            if table.lookup(record.key())?.is_none() {
                return Err(Error::MissingKey {
                    key: record.key().to_string(),
                });
            }
        }
        searching += start.elapsed();

        comparisons = table.comparisons();
    }

    Ok(RunResult {
        capacity,
        strategy: name,
        key_count: records.len(),
        insertion_ns: nanos(insertion),
        avg_search_ns: nanos(searching / search_rounds),
        collisions: table.collisions(),
        comparisons,
        insert_comparisons,
        longest_chain: table.longest_chain(),
    })
}

/// Runs every combination of key count, capacity and strategy in `config`.
///
/// Keys are generated once per key count from the configured seed, so every
/// table of a given size sees the same keys. `on_result` is called as soon as
/// each run finishes; an error from it stops the suite.
pub fn run_suite<F>(config: &BenchConfig, mut on_result: F) -> Result<Vec<RunResult>>
where
    F: FnMut(&RunResult) -> Result<()>,
{
    config.validate()?;

    let mut results = Vec::with_capacity(config.num_runs());

    for &key_count in &config.key_counts {
        info!("generating {} keys with seed {}", key_count, config.seed);
        let records = KeyGenerator::new(config.seed).records(key_count);

        for &capacity in &config.capacities {
            for &strategy in &config.strategies {
                info!(
                    "running {} strategy with capacity {} and {} keys",
                    strategy, capacity, key_count
                );

                let result = run_one(capacity, strategy, &records, config.search_rounds)?;
                on_result(&result)?;
                results.push(result);
            }
        }
    }

    Ok(results)
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfig {
        message: message.to_string(),
    }
}
