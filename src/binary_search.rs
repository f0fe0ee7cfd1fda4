//! Lower-bound binary search over sorted slices and sub-ranges.
//!
//! These are the primitives the lookup table search composes with. All
//! variants return the *first* matching index when duplicates exist.
//!
//! # Strategies
//!
//! | Function | Strategy | Best For |
//! |----------|----------|----------|
//! | [`binary_search_std`] | Stdlib `partition_point` | Baseline, oracle |
//! | [`binary_search_lower_bound`] | Length/first-index lower bound | Whole-array search |
//! | [`binary_search_range`] | Same loop over a sub-range | Narrowed intervals |
//!
//! # Performance notes
//!
//! - The loop tracks `first` and a remaining `len` instead of `left`/`right`,
//!   so the midpoint never overflows and each step halves `len`.
//! - There is no early exit on equality; that is what makes the result the
//!   leftmost occurrence.
//!
//! # References
//!
//! - [Binary search chapter](https://en.algorithmica.org/hpc/data-structures/binary-search/)

use std::ops::{Bound, Range, RangeBounds};

/// Standard library lower bound followed by an equality check.
pub fn binary_search_std<T: PartialOrd>(values: &[T], needle: T) -> Option<usize> {
    let idx = values.partition_point(|v| *v < needle);
    match values.get(idx) {
        Some(v) if *v == needle => Some(idx),
        _ => None,
    }
}

/// Lower-bound binary search over the whole slice.
pub fn binary_search_lower_bound<T: PartialOrd>(values: &[T], needle: T) -> Option<usize> {
    binary_search_range(values, .., needle)
}

/// Lower-bound binary search restricted to `range`.
///
/// Only indices inside `range` are probed, so a match outside it is not found.
/// Returns the leftmost matching index within the range.
///
/// # Panics
///
/// If `range` is decreasing or ends past `values.len()`, like slice indexing.
pub fn binary_search_range<T, R>(values: &[T], range: R, needle: T) -> Option<usize>
where
    T: PartialOrd,
    R: RangeBounds<usize>,
{
    let range = to_range(range, values.len());
    let end = range.end;
    let first = lower_bound(values, range, &needle);
    match values.get(first) {
        Some(v) if first < end && *v == needle => Some(first),
        _ => None,
    }
}

/// Leftmost index in `range` whose value is not less than `needle`, or
/// `range.end` if every value in the range is less.
#[inline]
pub(crate) fn lower_bound<T: PartialOrd>(values: &[T], range: Range<usize>, needle: &T) -> usize {
    let mut first = range.start;
    let mut len = range.len();
    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if values[middle] < *needle {
            first = middle + 1;
            len = len - half - 1;
        } else {
            len = half;
        }
    }
    first
}

fn to_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).expect("range start overflows usize"),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1).expect("range end overflows usize"),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    assert!(start <= end, "range start {start} is past range end {end}");
    assert!(end <= len, "range end {end} is out of bounds for length {len}");
    start..end
}
