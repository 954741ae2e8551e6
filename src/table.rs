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

//! A fixed-capacity hash table using separate chaining, instrumented for
//! benchmarking bucket index strategies.

use std::{cell::Cell, fmt};

use log::debug;

use crate::{
    error::{Error, Result},
    record::Record,
    strategy::{Division, HashStrategy},
};

/// A separate-chaining hash table with a fixed number of buckets.
///
/// Records are routed to a bucket by a pluggable [`HashStrategy`], which
/// defaults to [`Division`]. New records are appended to the tail of their
/// bucket, so a bucket is scanned in insertion order.
///
/// The table keeps two counters:
///
/// * `collisions` increases by one for every insertion that leaves its bucket
///   holding more than one record.
/// * `comparisons` increases by one for every key equality test made while
///   scanning a bucket, during both [`insert`] and [`lookup`]. It is only
///   cleared by [`reset_comparisons`].
///
/// The table never grows. Swapping the strategy with [`set_strategy`] does
/// not move existing records, so records stored under one strategy are only
/// found afterwards if the new strategy maps them to the same bucket.
///
/// [`insert`]: #method.insert
/// [`lookup`]: #method.lookup
/// [`reset_comparisons`]: #method.reset_comparisons
/// [`set_strategy`]: #method.set_strategy
pub struct HashTable {
    buckets: Vec<Vec<Record>>,
    strategy: Box<dyn HashStrategy>,
    len: usize,
    collisions: u64,
    comparisons: Cell<u64>,
}

impl HashTable {
    /// Creates an empty table with `capacity` buckets using [`Division`].
    ///
    /// Returns [`Error::Configuration`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<HashTable> {
        HashTable::with_strategy(capacity, Division)
    }

    /// Creates an empty table with `capacity` buckets that routes keys with
    /// `strategy`.
    pub fn with_strategy<S: HashStrategy + 'static>(
        capacity: usize,
        strategy: S,
    ) -> Result<HashTable> {
        if capacity == 0 {
            return Err(Error::Configuration { capacity });
        }

        debug!(
            "creating table with {} buckets using {} strategy",
            capacity,
            strategy.name()
        );

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Ok(HashTable {
            buckets,
            strategy: Box::new(strategy),
            len: 0,
            collisions: 0,
            comparisons: Cell::new(0),
        })
    }

    /// Replaces the strategy used by all subsequent operations.
    ///
    /// Stored records and both counters are left as they are.
    pub fn set_strategy<S: HashStrategy + 'static>(&mut self, strategy: S) {
        debug!(
            "switching strategy from {} to {} with {} records stored",
            self.strategy.name(),
            strategy.name(),
            self.len
        );

        self.strategy = Box::new(strategy);
    }

    /// Inserts `record` unless a record with the same key is already stored.
    ///
    /// Returns `true` if the record was stored and `false` if it was a
    /// duplicate. The bucket scan counts comparisons either way, but a
    /// duplicate never counts as a collision.
    pub fn insert(&mut self, record: Record) -> Result<bool> {
        let index = self.bucket_index(record.key())?;

        if self.scan(index, record.key()).is_some() {
            return Ok(false);
        }

        let bucket = &mut self.buckets[index];
        bucket.push(record);

        if bucket.len() > 1 {
            self.collisions += 1;
        }

        self.len += 1;

        Ok(true)
    }

    /// Returns the record stored under `key`, or `None` if there isn't one.
    pub fn lookup(&self, key: &str) -> Result<Option<&Record>> {
        let index = self.bucket_index(key)?;

        Ok(self.scan(index, key))
    }

    /// Sets the comparison counter back to zero.
    pub fn reset_comparisons(&self) {
        self.comparisons.set(0);
    }

    /// The number of insertions that landed in an already occupied bucket.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// The number of key equality tests since creation or the last
    /// [`reset_comparisons`](#method.reset_comparisons).
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// The fixed number of buckets in this table.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The number of distinct records stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The name of the active strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Returns the records in bucket `index` in scan order.
    pub fn bucket(&self, index: usize) -> Option<&[Record]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// The length of the longest bucket.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Stored records per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    fn bucket_index(&self, key: &str) -> Result<usize> {
        let capacity = self.capacity();
        let index = self.strategy.index(key, capacity)?;

        if index >= capacity {
            return Err(Error::IndexOutOfRange {
                strategy: self.strategy.name().to_string(),
                index,
                capacity,
            });
        }

        Ok(index)
    }

    fn scan(&self, index: usize, key: &str) -> Option<&Record> {
        self.buckets[index].iter().find(|record| {
            self.comparisons.set(self.comparisons.get() + 1);

            record.key() == key
        })
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("strategy", &self.strategy.name())
            .field("collisions", &self.collisions)
            .field("comparisons", &self.comparisons.get())
            .finish()
    }
}

#[cfg(test)]
mod tests;
