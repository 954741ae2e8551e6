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

//! Console and CSV sinks for benchmark results.

use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use crate::{bench::RunResult, error::Result};

/// Prints a human readable summary of one run to standard output.
pub fn print_result(result: &RunResult) {
    println!(
        "capacity {} / {} strategy / {} keys",
        result.capacity, result.strategy, result.key_count
    );
    println!("  insertion time:      {} ns", result.insertion_ns);
    println!("  average search time: {} ns", result.avg_search_ns);
    println!("  collisions:          {}", result.collisions);
    println!(
        "  comparisons:         {} per search pass, {} while inserting",
        result.comparisons, result.insert_comparisons
    );
    println!("  longest chain:       {}", result.longest_chain);
}

/// Appends results to a CSV file.
///
/// The header row is only written when the file is new or empty, so repeated
/// benchmark sessions accumulate rows in one file.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<CsvSink> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        let is_empty = file.metadata()?.len() == 0;

        let writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);

        Ok(CsvSink { writer })
    }

    pub fn write(&mut self, result: &RunResult) -> Result<()> {
        self.writer.serialize(result)?;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;

        Ok(())
    }
}
