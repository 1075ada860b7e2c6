#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};

/// Daily closing price parsed from Binance CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefClose {
    pub open_time: u64,
    pub close: f64,
}

/// Reference value with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: f64,
}

const CLOSES_PATH: &str = "tests/fixtures/data/btcusdt-1d-close.csv";
const DECLINING_PATH: &str = "tests/fixtures/data/declining-1d-close.csv";

/// Load the daily close series from Binance.
pub fn load_reference_closes() -> Vec<RefClose> {
    load_records(CLOSES_PATH, "invalid close record")
}

/// Load the monotonically declining close series.
pub fn load_declining_closes() -> Vec<RefClose> {
    load_records(DECLINING_PATH, "invalid close record")
}

/// Load running-best-profit reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Quadratic reference implementation: checks every buy/sell pair
/// directly. Definitionally correct, used to cross-check the scan.
pub fn naive_max_profit(prices: &[f64]) -> f64 {
    let mut best: f64 = 0.0;

    for (i, &buy) in prices.iter().enumerate() {
        for &sell in &prices[i + 1..] {
            best = best.max(sell - buy);
        }
    }

    best
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
