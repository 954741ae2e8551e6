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

use thiserror::Error;

/// Errors reported by hash tables, strategies and the benchmark driver.
///
/// A lookup miss is not an error: [`HashTable::lookup`] returns `Ok(None)`.
///
/// [`HashTable::lookup`]: crate::HashTable::lookup
#[derive(Error, Debug)]
pub enum Error {
    /// A table was requested with no buckets.
    #[error("invalid capacity {capacity}: a table needs at least one bucket")]
    Configuration { capacity: usize },

    /// A strategy that reads keys as integers was given something else.
    #[error("key {key:?} is not a non-negative decimal integer")]
    KeyFormat { key: String },

    /// A strategy produced a bucket index outside of `0..capacity`.
    #[error("strategy {strategy} returned index {index} for capacity {capacity}")]
    IndexOutOfRange {
        strategy: String,
        index: usize,
        capacity: usize,
    },

    #[error("unknown hash strategy {name:?} (expected division, multiplicative or folding)")]
    UnknownStrategy { name: String },

    #[error("invalid benchmark configuration: {message}")]
    InvalidConfig { message: String },

    /// An inserted key could not be found again during a lookup pass.
    #[error("key {key:?} was inserted but not found")]
    MissingKey { key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
