use crate::Price;

use thiserror::Error;

/// Rejection raised by [`try_max_profit`](crate::try_max_profit) when a
/// series contains a value that is not a valid price.
///
/// Invalid entries are rejected at the boundary rather than silently
/// coerced: a NaN would otherwise poison every min/max comparison in the
/// scan and surface as a nonsense profit far from its origin.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PriceError {
    #[error("non-finite price {value} at index {index}")]
    NotFinite { index: usize, value: Price },
    #[error("negative price {value} at index {index}")]
    Negative { index: usize, value: Price },
}

pub type Result<T> = std::result::Result<T, PriceError>;
