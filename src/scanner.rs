use std::fmt::Display;

use crate::{Price, PriceError, Result};

/// Streaming single-transaction profit scanner.
///
/// Feeds on a time-ordered price series and tracks the best profit
/// achievable from one buy followed by one later sell. State is two
/// values: the lowest price observed so far and the best profit so far,
/// so memory is O(1) and each [`observe`](ProfitScanner::observe) is O(1).
///
/// The minimum is updated *before* the candidate profit for the same
/// price, which makes the same-step candidate at worst zero. The "no
/// profitable pair" case therefore needs no separate branch: the result
/// simply stays at `0.0`.
///
/// # Example
///
/// ```rust
/// use profit_scan::ProfitScanner;
///
/// let mut scanner = ProfitScanner::new();
///
/// assert_eq!(scanner.observe(7.0), 0.0);
/// assert_eq!(scanner.observe(1.0), 0.0);
/// assert_eq!(scanner.observe(5.0), 4.0);
/// assert_eq!(scanner.observe(3.0), 4.0);
/// assert_eq!(scanner.observe(6.0), 5.0); // buy at 1, sell at 6
/// assert_eq!(scanner.best_profit(), 5.0);
/// ```
#[derive(Clone, Default, Debug)]
pub struct ProfitScanner {
    min_so_far: Option<Price>,
    best_profit: Price,
    observed: usize,
}

impl ProfitScanner {
    /// Creates a scanner that has observed no prices yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next price in the series and returns the updated best
    /// profit.
    ///
    /// The first observed price seeds the running minimum; no sentinel
    /// bound on the price domain is assumed.
    ///
    /// `price` must be finite and non-negative (debug-asserted). Use
    /// [`try_max_profit`] as the boundary for unvalidated data.
    #[inline]
    pub fn observe(&mut self, price: Price) -> Price {
        debug_assert!(
            price.is_finite() && price >= 0.0,
            "price must be finite and non-negative, got {price}",
        );

        let min = match self.min_so_far {
            Some(min) => min.min(price),
            None => price,
        };

        self.min_so_far = Some(min);
        self.best_profit = self.best_profit.max(price - min);
        self.observed += 1;

        self.best_profit
    }

    /// Returns the best profit seen so far without advancing state.
    ///
    /// `0.0` until a profitable buy/sell pair has been observed. Never
    /// negative, and non-decreasing across [`observe`](Self::observe)
    /// calls.
    #[inline]
    #[must_use]
    pub fn best_profit(&self) -> Price {
        self.best_profit
    }

    /// Lowest price observed so far, or `None` before the first price.
    #[inline]
    #[must_use]
    pub fn min_so_far(&self) -> Option<Price> {
        self.min_so_far
    }

    /// Number of prices fed so far.
    #[inline]
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Returns the scanner to its initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Display for ProfitScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.min_so_far {
            Some(min) => write!(
                f,
                "ProfitScanner(best={}, min={}, observed={})",
                self.best_profit, min, self.observed
            ),
            None => write!(f, "ProfitScanner(empty)"),
        }
    }
}

/// Maximum profit from a single buy-then-sell transaction over `prices`.
///
/// Returns the largest `prices[j] - prices[i]` over all pairs with
/// `i < j`, or `0.0` when no pair exists (empty or single-element input)
/// or every such difference is negative. Single forward pass, O(n) time,
/// O(1) extra space. Pure: no state survives the call.
///
/// Every element must be finite and non-negative (debug-asserted); see
/// [`try_max_profit`] for the checked variant.
///
/// # Example
///
/// ```rust
/// use profit_scan::max_profit;
///
/// assert_eq!(max_profit(&[7.0, 1.0, 5.0, 3.0, 6.0, 4.0]), 5.0);
/// assert_eq!(max_profit(&[7.0, 6.0, 4.0, 3.0, 1.0]), 0.0);
/// assert_eq!(max_profit(&[]), 0.0);
/// ```
#[must_use]
pub fn max_profit(prices: &[Price]) -> Price {
    let mut scanner = ProfitScanner::new();

    for &price in prices {
        scanner.observe(price);
    }

    scanner.best_profit()
}

/// Validating variant of [`max_profit`] for unvalidated input.
///
/// Scans the series for entries that are not valid prices before
/// computing. The first offending entry is reported with its index.
///
/// # Errors
///
/// [`PriceError::NotFinite`] for NaN or infinite entries,
/// [`PriceError::Negative`] for negative ones.
///
/// # Example
///
/// ```rust
/// use profit_scan::{PriceError, try_max_profit};
///
/// assert_eq!(try_max_profit(&[2.0, 4.0, 1.0]), Ok(2.0));
///
/// let err = try_max_profit(&[2.0, f64::NAN, 1.0]).unwrap_err();
/// assert!(matches!(err, PriceError::NotFinite { index: 1, .. }));
/// ```
pub fn try_max_profit(prices: &[Price]) -> Result<Price> {
    for (index, &value) in prices.iter().enumerate() {
        if !value.is_finite() {
            return Err(PriceError::NotFinite { index, value });
        }
        if value < 0.0 {
            return Err(PriceError::Negative { index, value });
        }
    }

    Ok(max_profit(prices))
}
