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

use hashbench::{
    bench::{self, BenchConfig},
    report::{self, CsvSink},
    StrategyKind,
};

use std::{path::PathBuf, process};

use clap::Parser;
use env_logger::Builder;
use log::{error, info, LevelFilter};

/// Compares bucket index strategies on an instrumented chaining hash table.
#[derive(Parser, Debug)]
#[command(name = "hash-bench", version, about)]
struct Args {
    /// Table capacities to benchmark
    #[arg(long, value_delimiter = ',', default_values_t = [10usize, 100, 1_000, 10_000, 100_000])]
    capacities: Vec<usize>,

    /// Number of generated keys per run
    #[arg(long, value_delimiter = ',', default_values_t = [1_000_000usize, 5_000_000, 20_000_000])]
    key_counts: Vec<usize>,

    /// Strategies to compare: division, multiplicative, folding
    #[arg(long, value_delimiter = ',', default_values_t = StrategyKind::ALL)]
    strategies: Vec<StrategyKind>,

    /// Seed for key generation
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Lookup passes averaged per run
    #[arg(long, default_value_t = 5)]
    search_rounds: u32,

    /// CSV file results are appended to
    #[arg(long, default_value = "results.csv")]
    csv: PathBuf,

    /// Only print results to the console
    #[arg(long)]
    no_csv: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            capacities: self.capacities.clone(),
            key_counts: self.key_counts.clone(),
            strategies: self.strategies.clone(),
            seed: self.seed,
            search_rounds: self.search_rounds,
        }
    }
}

fn main() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> hashbench::Result<()> {
    let config = args.config();
    config.validate()?;

    info!(
        "{} runs: capacities {:?}, key counts {:?}, strategies {:?}",
        config.num_runs(),
        config.capacities,
        config.key_counts,
        config.strategies
    );

    let mut sink = if args.no_csv {
        None
    } else {
        info!("appending results to {}", args.csv.display());
        Some(CsvSink::open(&args.csv)?)
    };

    bench::run_suite(&config, |result| {
        report::print_result(result);
        println!();

        match sink.as_mut() {
            Some(sink) => {
                sink.write(result)?;
                sink.flush()
            }
            None => Ok(()),
        }
    })?;

    Ok(())
}
