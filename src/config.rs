//! Lookup table configuration.

use crate::error::{LutError, Result};

/// Smallest supported lookup table width.
pub const MIN_LUT_BITS: u32 = 1;

/// Largest supported lookup table width.
pub const MAX_LUT_BITS: u32 = 31;

/// 16 bits gives a 512 KiB table of `usize` on 64-bit targets, which narrows
/// million-element arrays to a handful of candidates.
pub const DEFAULT_LUT_BITS: u32 = 16;

/// Parameters for building a [`LutIndex`](crate::LutIndex).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LutConfig {
    /// Number of high key bits addressing the table (`2^bits + 1` entries).
    pub bits: u32,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_LUT_BITS,
        }
    }
}

impl LutConfig {
    /// Sets the table width; checked by [`validate`](Self::validate).
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    /// Rejects widths outside `MIN_LUT_BITS..=MAX_LUT_BITS`.
    pub fn validate(&self) -> Result<()> {
        if (MIN_LUT_BITS..=MAX_LUT_BITS).contains(&self.bits) {
            Ok(())
        } else {
            Err(LutError::InvalidBitWidth { bits: self.bits })
        }
    }

    /// Number of buckets addressed by the table.
    #[inline]
    pub fn buckets(&self) -> usize {
        1usize << self.bits
    }

    /// Right shift that extracts the bucket from a mapped key.
    #[inline]
    pub(crate) fn shift(&self) -> u32 {
        u32::BITS - self.bits
    }
}
