//! Shared helpers for workspace scenario tests.
//!
//! Float comparison and deterministic synthetic bar generators.

#![allow(dead_code)]

use market_ta::ta_core::{Bar, PriceSeries};

/// Daily bar spacing in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Tiered float comparison.
///
/// - Near zero (|expected| < 1e-10): absolute tolerance
/// - Otherwise: relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "{context}: expected {expected} but got {actual}"
    );

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Arithmetic mean.
pub fn naive_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divisor `len - 1`).
pub fn naive_sample_std(values: &[f64]) -> f64 {
    let mean = naive_mean(values);
    let m2: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (m2 / (values.len() as f64 - 1.0)).sqrt()
}

/// EMA seeded with the first value, same operation order as the library.
pub fn naive_ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &x in &values[1..] {
        prev += alpha * (x - prev);
        out.push(prev);
    }
    out
}

/// Closes starting at `start`, moving by `step` per bar.
pub fn linear_closes(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Random-walk closes from a deterministic LCG, kept positive.
pub fn random_walk_closes(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut closes = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next() * volatility).max(0.01);
        }
        closes.push(last);
    }
    closes
}

/// Flat bars (open = high = low = close) with a constant volume.
pub fn flat_bars(closes: &[f64], volume: f64) -> Vec<Bar<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::flat(i as i64 * DAY_MS, close, volume))
        .collect()
}

/// Bars opening at the previous close with a high/low spread of `range_pct`.
pub fn bars_from_closes(closes: &[f64], range_pct: f64) -> Vec<Bar<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let spread = close * range_pct * 0.5;
            Bar::new(
                i as i64 * DAY_MS,
                open,
                close.max(open) + spread,
                close.min(open) - spread,
                close,
                1_000.0 + i as f64 * 100.0,
            )
        })
        .collect()
}

/// Validated series from bars.
pub fn series(bars: Vec<Bar<f64>>) -> PriceSeries<f64> {
    PriceSeries::new(bars).expect("generated bars are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq() {
        assert_float_eq(1.0, 1.0, 1e-10, "exact");
        assert_float_eq(100.0, 100.000_000_1, 1e-6, "relative");
        assert_float_eq(1e-12, 0.0, 1e-9, "absolute");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_rejects_nan() {
        assert_float_eq(f64::NAN, 1.0, 1e-10, "nan");
    }

    #[test]
    fn test_random_walk_deterministic() {
        let a = random_walk_closes(100.0, 1.0, 50, 12_345);
        let b = random_walk_closes(100.0, 1.0, 50, 12_345);
        assert_eq!(a, b);
        assert!(a.iter().all(|&c| c > 0.0));
    }
}
