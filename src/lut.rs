//! Lookup-table narrowed binary search.
//!
//! A [`LutIndex`] buckets a sorted slice by the top `bits` bits of each
//! element's mapped key (see [`SortKey`]). The table stores, per bucket, the
//! index of the first element in that bucket or a later one, so a query only
//! binary-searches the elements sharing its bucket:
//!
//! ```text
//! values (u32, bits = 2):   1   3   3   5   7   9      all in bucket 0
//! table:                  [ 0,  0,  0,  0,  0 ]      2^2 + 1 entries
//! ```
//!
//! Buckets past the last one seen during construction all point at the tail
//! run of the array, and their interval end is the last element.
//!
//! Construction is one linear pass plus an O(2^bits) fill. Lookups are
//! read-only, so a built index can be shared between threads freely.

use std::ops::Range;

use crate::binary_search::{binary_search_range, binary_search_std};
use crate::config::LutConfig;
use crate::error::{LutError, Result};
use crate::key::SortKey;

/// Sorted slice plus a lookup table over the high bits of its mapped keys.
#[derive(Clone, Debug)]
pub struct LutIndex<'a, T> {
    values: &'a [T],
    table: Vec<usize>,
    config: LutConfig,
    last_bucket: usize,
}

impl<'a, T: SortKey> LutIndex<'a, T> {
    /// Builds an index over `values` with a `2^bits + 1` entry table.
    ///
    /// `values` must be ascending under `PartialOrd`. Equal elements may
    /// appear in any order, including `+0.0` before `-0.0`.
    pub fn new(values: &'a [T], bits: u32) -> Result<Self> {
        Self::with_config(values, LutConfig::default().with_bits(bits))
    }

    /// Builds an index over `values` using the table width in `config`.
    pub fn with_config(values: &'a [T], config: LutConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::debug!(bits = config.bits, "lut_index: rejected table width");
            return Err(err);
        }

        let (table, last_bucket) = build_table(values, &config)?;
        tracing::debug!(
            len = values.len(),
            bits = config.bits,
            last_bucket,
            "lut_index: built lookup table"
        );

        Ok(Self {
            values,
            table,
            config,
            last_bucket,
        })
    }

    /// Lookup-table narrowed search. Returns the first index holding `key`.
    #[inline]
    pub fn lut_search(&self, key: T) -> Option<usize> {
        binary_search_range(self.values, self.narrow(key), key)
    }

    /// Lower-bound search over the whole array, ignoring the table.
    pub fn plain_search(&self, key: T) -> Option<usize> {
        binary_search_range(self.values, .., key)
    }

    /// Standard library search; the reference the other two must agree with.
    pub fn baseline_search(&self, key: T) -> Option<usize> {
        binary_search_std(self.values, key)
    }

    /// Lower-bound search over an arbitrary sub-range of the backing array.
    ///
    /// # Panics
    ///
    /// If `range` is decreasing or extends past [`len`](Self::len).
    pub fn search_within<R>(&self, range: R, key: T) -> Option<usize>
    where
        R: std::ops::RangeBounds<usize>,
    {
        binary_search_range(self.values, range, key)
    }

    /// Half-open interval that contains every occurrence of `key`, if any.
    pub fn narrow(&self, key: T) -> Range<usize> {
        let span = key.key_span();
        let start = self.table[self.bucket(*span.start())];
        start..self.bucket_end(self.bucket(*span.end()))
    }

    /// Bucket the table assigns to `key`.
    #[inline]
    pub fn bucket_of(&self, key: T) -> usize {
        self.bucket(key.map_key())
    }

    #[inline]
    fn bucket(&self, mapped: u32) -> usize {
        (mapped >> self.config.shift()) as usize
    }

    /// Exclusive end of `bucket`'s interval.
    #[inline]
    fn bucket_end(&self, bucket: usize) -> usize {
        if bucket >= self.last_bucket {
            self.values.len()
        } else {
            self.table[bucket + 1]
        }
    }
}

impl<'a, T> LutIndex<'a, T> {
    /// The backing array.
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bits(&self) -> u32 {
        self.config.bits
    }

    pub fn config(&self) -> LutConfig {
        self.config
    }

    /// Bucket start indices; `2^bits + 1` entries, non-decreasing.
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Highest bucket any element falls in (0 for empty arrays).
    pub fn last_bucket(&self) -> usize {
        self.last_bucket
    }
}

/// Fills the table in one pass and returns it with the last assigned bucket.
///
/// `table[b]` becomes the first index whose bucket is `>= b`. Walking the
/// elements, every time the bucket advances from `threshold` to `next`, the
/// skipped buckets `(threshold, next]` all start at the current element.
/// A bucket that dips (a run of equal values with different keys, such as
/// `+0.0` followed by `-0.0`) never moves `threshold` backwards.
fn build_table<T: SortKey>(values: &[T], config: &LutConfig) -> Result<(Vec<usize>, usize)> {
    let size = config.buckets() + 1;
    let mut table = Vec::new();
    table.try_reserve_exact(size)?;
    table.resize(size, 0usize);

    let shift = config.shift();
    let mut threshold = 0usize;
    let mut last = 0usize;
    for (i, value) in values.iter().enumerate() {
        if i > 0 && *value < values[i - 1] {
            return Err(LutError::Unsorted { index: i });
        }

        let mapped = value.map_key();
        let next_threshold = (mapped >> shift) as usize;
        if next_threshold > threshold {
            last = i;
            table[threshold + 1..=next_threshold].fill(last);
            threshold = next_threshold;
        }
    }

    // Buckets past the last boundary have no elements of their own; they
    // start at the tail run so the table stays monotone.
    table[threshold..].fill(last);

    Ok((table, threshold))
}
