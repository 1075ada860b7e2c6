//! Single-transaction maximum profit over a price series.
//!
//! Given a time-ordered sequence of asset prices, find the best single
//! buy day and later sell day maximizing `sell - buy`. The result is
//! never negative: when no profitable pair exists, no transaction is
//! taken and the profit is `0.0`.
//!
//! Two forms of the same O(n)-time, O(1)-space scan:
//!
//! - [`max_profit`] / [`try_max_profit`] over a complete `&[Price]`
//! - [`ProfitScanner`] fed one price at a time for streaming use
//!
//! ```rust
//! use profit_scan::max_profit;
//!
//! // buy at 1, sell at 6
//! assert_eq!(max_profit(&[7.0, 1.0, 5.0, 3.0, 6.0, 4.0]), 5.0);
//! ```

mod error;
mod price;
mod scanner;

pub use crate::error::{PriceError, Result};
pub use crate::price::Price;
pub use crate::scanner::{ProfitScanner, max_profit, try_max_profit};

#[cfg(test)]
mod test_util;
