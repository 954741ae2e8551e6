// MIT License
//
// Copyright (c) 2019 Gregory Meyer
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

//! An instrumented, fixed-capacity hash table for comparing bucket index
//! strategies.
//!
//! [`HashTable`] chains colliding records in per-bucket lists and counts both
//! collisions and key comparisons. The bucket index is computed by a
//! pluggable [`HashStrategy`]: [`Division`], [`Multiplicative`], [`Folding`],
//! or a closure wrapped with [`from_fn`]. The [`bench`] and [`report`]
//! modules drive benchmark runs over generated nine digit keys and export the
//! results.

pub mod bench;
pub mod error;
pub mod keys;
pub mod record;
pub mod report;
pub mod strategy;
pub mod table;

pub use error::{Error, Result};
pub use record::Record;
pub use strategy::{from_fn, Division, Folding, HashStrategy, Multiplicative, StrategyKind};
pub use table::HashTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_table_basics() {
        let mut table = HashTable::new(8).unwrap();

        assert!(table.insert(Record::new("000000001")).unwrap());
        assert!(table.insert(Record::new("000000002")).unwrap());
        assert!(table.insert(Record::new("000000009")).unwrap());
        assert!(table.insert(Record::new("000000017")).unwrap());

        assert_eq!(table.len(), 4);
        assert_eq!(table.collisions(), 2);

        assert!(table.lookup("000000001").unwrap().is_some());
        assert!(table.lookup("000000002").unwrap().is_some());
        assert!(table.lookup("000000009").unwrap().is_some());
        assert!(table.lookup("000000017").unwrap().is_some());
        assert!(table.lookup("000000025").unwrap().is_none());

        assert!(!table.insert(Record::new("000000017")).unwrap());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn strategies_share_a_table() {
        let mut table = HashTable::new(7).unwrap();

        let stored: Vec<_> = StrategyKind::ALL
            .iter()
            .map(|&kind| {
                table.set_strategy(kind);
                table.insert(Record::new("000000099")).unwrap()
            })
            .collect();

        // division and multiplicative both pick bucket 1, folding picks 18 % 7
        assert_eq!(stored, [true, false, true]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.bucket(1).unwrap().len(), 1);
        assert_eq!(table.bucket(4).unwrap().len(), 1);
        assert_eq!(table.collisions(), 0);
    }
}
