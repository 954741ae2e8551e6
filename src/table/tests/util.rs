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

use crate::{
    record::Record,
    strategy::{from_fn, HashStrategy},
};

/// Formats `value` the way generated keys look: nine digits, zero padded.
pub(crate) fn padded(value: u64) -> Record {
    Record::new(format!("{:09}", value))
}

/// A strategy that sends every key to bucket `index`.
pub(crate) fn constant(index: usize) -> impl HashStrategy {
    from_fn("constant", move |_: &str, _| Ok(index))
}

/// Number of collisions implied by the current bucket lengths.
pub(crate) fn implied_collisions<'a, I>(buckets: I) -> u64
where
    I: IntoIterator<Item = &'a [Record]>,
{
    buckets
        .into_iter()
        .map(|bucket| bucket.len().saturating_sub(1) as u64)
        .sum()
}
