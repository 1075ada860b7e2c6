/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
///
/// Prices fed to this crate are expected to be finite and non-negative.
/// The unchecked entry points ([`max_profit`](crate::max_profit),
/// [`ProfitScanner::observe`](crate::ProfitScanner::observe)) document this
/// as a precondition; [`try_max_profit`](crate::try_max_profit) enforces it
/// and rejects violations with [`PriceError`](crate::PriceError).
pub type Price = f64;
