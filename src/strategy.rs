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

//! Bucket index strategies.
//!
//! A strategy maps a key and a table capacity to a bucket index in
//! `0..capacity`. Strategies must be pure: the same key and capacity always
//! produce the same index, otherwise a table could neither detect duplicates
//! nor find what it stored.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// `(sqrt(5) - 1) / 2`, the multiplier suggested by Knuth.
pub const KNUTH: f64 = 0.618_033_988_749_894_9;

/// Computes bucket indices for a [`HashTable`](crate::HashTable).
pub trait HashStrategy {
    /// Returns the bucket index for `key` in a table with `capacity` buckets.
    ///
    /// Implementations must return a value less than `capacity` and must not
    /// depend on any state besides their arguments.
    fn index(&self, key: &str, capacity: usize) -> Result<usize>;

    /// A short, stable name used in reports.
    fn name(&self) -> &str;
}

/// Interprets the key as an integer and takes it modulo the capacity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Division;

/// Knuth's multiplicative method applied directly to the key's value.
///
/// The key is read as an `f64` and multiplied by [`KNUTH`] before the
/// fractional part is scaled up to the capacity. Nine digit keys leave only a
/// few bits of fraction after the multiplication, so the distribution is
/// noticeably worse than the textbook method that multiplies a small hash
/// value. Benchmarks compare against exactly this arithmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicative;

/// Sums the decimal digits of the key modulo the capacity.
///
/// Characters that are not ASCII digits contribute nothing, so this strategy
/// never rejects a key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Folding;

impl HashStrategy for Division {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        let capacity = check_capacity(capacity)?;
        let value = parse_key(key)?;

        Ok((value % capacity as u64) as usize)
    }

    fn name(&self) -> &str {
        "division"
    }
}

impl HashStrategy for Multiplicative {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        let capacity = check_capacity(capacity)?;
        let value = parse_key(key)? as f64;

        let product = value * KNUTH;
        let fraction = product - product.floor();
        let index = (capacity as f64 * fraction).floor() as usize;

        // capacity * fraction can round up to capacity when fraction is within
        // one ulp of 1.0
        Ok(index.min(capacity - 1))
    }

    fn name(&self) -> &str {
        "multiplicative"
    }
}

impl HashStrategy for Folding {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        let capacity = check_capacity(capacity)? as u64;

        let sum = key
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u64, |sum, digit| (sum + u64::from(digit - b'0')) % capacity);

        Ok(sum as usize)
    }

    fn name(&self) -> &str {
        "folding"
    }
}

/// The built-in strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Division,
    Multiplicative,
    Folding,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Division,
        StrategyKind::Multiplicative,
        StrategyKind::Folding,
    ];
}

impl Default for StrategyKind {
    fn default() -> StrategyKind {
        StrategyKind::Division
    }
}

impl HashStrategy for StrategyKind {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        match self {
            StrategyKind::Division => Division.index(key, capacity),
            StrategyKind::Multiplicative => Multiplicative.index(key, capacity),
            StrategyKind::Folding => Folding.index(key, capacity),
        }
    }

    fn name(&self) -> &str {
        match self {
            StrategyKind::Division => Division.name(),
            StrategyKind::Multiplicative => Multiplicative.name(),
            StrategyKind::Folding => Folding.name(),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<StrategyKind> {
        StrategyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

/// A caller-supplied strategy backed by a closure.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

/// Wraps `f` as a named [`HashStrategy`].
///
/// The closure is trusted to be pure; indices it returns outside of
/// `0..capacity` are rejected by the table.
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnStrategy<F>
where
    F: Fn(&str, usize) -> Result<usize>,
{
    FnStrategy {
        name: name.into(),
        f,
    }
}

impl<F: Fn(&str, usize) -> Result<usize>> HashStrategy for FnStrategy<F> {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        (self.f)(key, capacity)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Reads a key as a non-negative decimal integer.
///
/// Only ASCII digits are accepted; signs, whitespace and empty keys are
/// rejected, as are values that do not fit in a `u64`.
pub fn parse_key(key: &str) -> Result<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::KeyFormat {
            key: key.to_string(),
        });
    }

    key.parse().map_err(|_| Error::KeyFormat {
        key: key.to_string(),
    })
}

fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        Err(Error::Configuration { capacity })
    } else {
        Ok(capacity)
    }
}
