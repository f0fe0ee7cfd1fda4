//! Error types for lookup table construction.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LutError {
    #[error("invalid lookup table width: {bits} bits (expected 1..=31)")]
    InvalidBitWidth { bits: u32 },

    #[error("values are not sorted: element {index} orders before its predecessor")]
    Unsorted { index: usize },

    #[error("lookup table allocation failed: {0}")]
    TableAlloc(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, LutError>;
