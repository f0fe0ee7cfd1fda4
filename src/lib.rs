//! Lookup-table accelerated binary search over sorted 32-bit scalar arrays.
//!
//! A sorted array of `u32`, `i32` or `f32` is bucketed by the top bits of an
//! order-preserving unsigned key. A lookup reads its bucket's interval from the
//! table and binary-searches only that interval, which skips the first
//! `bits` or so levels of a whole-array search.
//!
//! # Modules
//!
//! - **Keys** ([`SortKey`]) — order-preserving `u32` maps for each domain
//! - **Binary search** ([`binary_search_std`], [`binary_search_range`]) — lower-bound primitives
//! - **Lookup table** ([`LutIndex`]) — construction and narrowed search
//!
//! # Example
//!
//! ```
//! use lut_search::LutIndex;
//!
//! let values = [-5i32, -1, 0, 2, 8];
//! let index = LutIndex::new(&values, 8)?;
//!
//! assert_eq!(index.lut_search(-1), Some(1));
//! assert_eq!(index.lut_search(3), None);
//! assert_eq!(index.lut_search(-1), index.baseline_search(-1));
//! # Ok::<(), lut_search::LutError>(())
//! ```
//!
//! # References
//!
//! - David Geier, "Optimizing binary search" (lookup table narrowing)
//! - [Binary search chapter](https://en.algorithmica.org/hpc/data-structures/binary-search/)

mod binary_search;
mod config;
mod error;
mod key;
mod lut;

pub use binary_search::*;
pub use config::*;
pub use error::*;
pub use key::*;
pub use lut::*;
