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

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::record::Record;

/// Number of digits in a generated key.
pub const KEY_WIDTH: usize = 9;

const KEY_SPACE: u32 = 1_000_000_000;

/// Deterministic source of fixed-width numeric keys.
///
/// Keys are drawn uniformly from `0..10^9` and zero padded to nine digits, so
/// the same seed always yields the same sequence. Nothing prevents a key from
/// being drawn twice.
pub struct KeyGenerator {
    rng: StdRng,
}

impl KeyGenerator {
    pub fn new(seed: u64) -> KeyGenerator {
        KeyGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_key(&mut self) -> String {
        let value = self.rng.gen_range(0..KEY_SPACE);

        format!("{:0width$}", value, width = KEY_WIDTH)
    }

    /// Generates `count` records.
    pub fn records(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| Record::new(self.next_key())).collect()
    }
}
