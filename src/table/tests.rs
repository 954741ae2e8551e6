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

mod util;

use util::{constant, implied_collisions, padded};

use super::*;

use crate::strategy::{from_fn, Folding, Multiplicative, StrategyKind};

#[test]
fn zero_capacity_is_rejected() {
    match HashTable::new(0) {
        Err(Error::Configuration { capacity }) => assert_eq!(capacity, 0),
        other => panic!("expected a configuration error, got {:?}", other),
    }

    assert!(HashTable::with_strategy(0, Folding).is_err());
}

#[test]
fn new_table() {
    let table = HashTable::new(10).unwrap();

    assert_eq!(table.capacity(), 10);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.collisions(), 0);
    assert_eq!(table.comparisons(), 0);
    assert_eq!(table.strategy_name(), "division");
    assert_eq!(table.longest_chain(), 0);
    assert!(table.bucket(9).unwrap().is_empty());
    assert!(table.bucket(10).is_none());
}

#[test]
fn shared_bucket_under_division() {
    let mut table = HashTable::new(10).unwrap();

    assert!(table.insert(Record::new("000000005")).unwrap());
    assert_eq!(table.collisions(), 0);
    assert_eq!(table.comparisons(), 0);

    assert!(table.insert(Record::new("000000015")).unwrap());
    assert_eq!(table.collisions(), 1);
    assert_eq!(table.comparisons(), 1);

    assert!(table.insert(Record::new("000000025")).unwrap());
    assert_eq!(table.collisions(), 2);
    assert_eq!(table.comparisons(), 3);

    let keys: Vec<_> = table.bucket(5).unwrap().iter().map(Record::key).collect();
    assert_eq!(keys, ["000000005", "000000015", "000000025"]);

    table.reset_comparisons();
    assert_eq!(table.comparisons(), 0);

    assert_eq!(
        table.lookup("000000015").unwrap(),
        Some(&Record::new("000000015"))
    );
    assert_eq!(table.comparisons(), 2);

    table.reset_comparisons();
    assert!(table.lookup("000000005").unwrap().is_some());
    assert_eq!(table.comparisons(), 1);

    table.reset_comparisons();
    assert!(table.lookup("000000025").unwrap().is_some());
    assert_eq!(table.comparisons(), 3);

    assert_eq!(table.collisions(), 2);
    assert_eq!(table.len(), 3);
    assert_eq!(table.longest_chain(), 3);
}

#[test]
fn collisions_count_inserting_events() {
    const NUM_KEYS: u64 = 64;

    let mut table = HashTable::with_strategy(16, constant(3)).unwrap();

    for i in 0..NUM_KEYS {
        assert!(table.insert(padded(i)).unwrap());
        assert_eq!(table.collisions(), i);
    }

    assert_eq!(table.collisions(), NUM_KEYS - 1);
    // the i-th insert compares against the i records already in the bucket
    assert_eq!(table.comparisons(), NUM_KEYS * (NUM_KEYS - 1) / 2);
    assert_eq!(table.bucket(3).unwrap().len(), NUM_KEYS as usize);
}

#[test]
fn duplicate_insert_is_a_noop() {
    let mut table = HashTable::new(10).unwrap();

    assert!(table.insert(Record::new("000000007")).unwrap());
    assert!(table.insert(Record::new("000000017")).unwrap());

    let collisions = table.collisions();
    let comparisons = table.comparisons();

    assert!(!table.insert(Record::new("000000017")).unwrap());

    assert_eq!(table.collisions(), collisions);
    assert_eq!(table.comparisons(), comparisons + 2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.bucket(7).unwrap().len(), 2);

    assert!(!table.insert(Record::new("000000007")).unwrap());

    assert_eq!(table.comparisons(), comparisons + 3);
    assert_eq!(table.collisions(), collisions);
}

#[test]
fn lookup_miss() {
    let mut table = HashTable::new(10).unwrap();

    assert_eq!(table.lookup("000000003").unwrap(), None);
    assert_eq!(table.comparisons(), 0);

    table.insert(Record::new("000000013")).unwrap();
    table.insert(Record::new("000000023")).unwrap();
    table.reset_comparisons();

    assert_eq!(table.lookup("000000003").unwrap(), None);
    assert_eq!(table.comparisons(), 2);
}

#[test]
fn reset_only_touches_comparisons() {
    let mut table = HashTable::with_strategy(4, constant(0)).unwrap();

    for i in 0..5 {
        table.insert(padded(i)).unwrap();
    }

    assert_eq!(table.comparisons(), 10);

    table.reset_comparisons();

    assert_eq!(table.comparisons(), 0);
    assert_eq!(table.collisions(), 4);
    assert_eq!(table.len(), 5);

    assert!(table.lookup("000000004").unwrap().is_some());
    assert_eq!(table.comparisons(), 5);

    table.insert(padded(5)).unwrap();
    assert_eq!(table.comparisons(), 10);
}

#[test]
fn leading_zeros_are_distinct_keys() {
    let mut table = HashTable::new(10).unwrap();

    assert!(table.insert(Record::new("42")).unwrap());
    assert!(table.insert(Record::new("000000042")).unwrap());

    assert_eq!(table.len(), 2);
    assert_eq!(table.collisions(), 1);
    assert_eq!(table.lookup("0042").unwrap(), None);
}

#[test]
fn swapping_strategies() {
    let mut table = HashTable::new(10).unwrap();

    table.insert(Record::new("000000012")).unwrap();
    assert_eq!(table.bucket(2).unwrap().len(), 1);

    table.set_strategy(Folding);
    assert_eq!(table.strategy_name(), "folding");

    // folding sends the key to bucket 3, which is empty
    assert_eq!(table.lookup("000000012").unwrap(), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.collisions(), 0);

    table.insert(Record::new("000000012")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.bucket(3).unwrap().len(), 1);

    table.set_strategy(StrategyKind::Division);
    assert!(table.lookup("000000012").unwrap().is_some());
}

#[test]
fn multiplicative_placement() {
    let mut table = HashTable::with_strategy(1000, Multiplicative).unwrap();

    table.insert(Record::new("123456789")).unwrap();

    assert_eq!(table.bucket(743).unwrap(), &[Record::new("123456789")]);
}

#[test]
fn unparseable_key() {
    let mut table = HashTable::new(10).unwrap();

    match table.insert(Record::new("12ab")) {
        Err(Error::KeyFormat { key }) => assert_eq!(key, "12ab"),
        other => panic!("expected a key format error, got {:?}", other),
    }

    assert!(table.is_empty());
    assert_eq!(table.comparisons(), 0);
    assert!(matches!(
        table.lookup("12ab"),
        Err(Error::KeyFormat { .. })
    ));

    table.set_strategy(Folding);
    assert!(table.insert(Record::new("12ab")).unwrap());
    assert!(table.lookup("12ab").unwrap().is_some());
}

#[test]
fn out_of_range_index() {
    let mut table = HashTable::with_strategy(8, from_fn("overflow", |_: &str, capacity| {
        Ok(capacity)
    }))
    .unwrap();

    match table.insert(padded(1)) {
        Err(Error::IndexOutOfRange {
            strategy,
            index,
            capacity,
        }) => {
            assert_eq!(strategy, "overflow");
            assert_eq!(index, 8);
            assert_eq!(capacity, 8);
        }
        other => panic!("expected an out of range error, got {:?}", other),
    }

    assert!(table.is_empty());
}

#[test]
fn every_inserted_key_is_found() {
    const CAPACITY: usize = 97;

    for kind in StrategyKind::ALL {
        let mut table = HashTable::with_strategy(CAPACITY, kind).unwrap();

        for i in (0..20_000).step_by(7) {
            assert!(table.insert(padded(i)).unwrap());
        }

        for i in (0..20_000).step_by(7) {
            assert_eq!(table.lookup(&format!("{:09}", i)).unwrap(), Some(&padded(i)));
        }

        for i in (1..20_000).step_by(7) {
            assert_eq!(table.lookup(&format!("{:09}", i)).unwrap(), None);
        }

        let buckets = (0..CAPACITY).filter_map(|i| table.bucket(i));
        assert_eq!(table.collisions(), implied_collisions(buckets));
        assert_eq!(table.len(), 2858);
        assert!((table.load_factor() - 2858.0 / 97.0).abs() < 1e-9);
    }
}
