//! Fibonacci retracement levels.
//!
//! Interpolates price levels between the highest high and lowest low of a
//! trailing window at fixed ratios.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    traits::{Indicator, IndicatorConfig},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The standard retracement ratios.
pub const DEFAULT_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// Configuration for Fibonacci retracement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FibonacciConfig {
    /// Number of trailing bars to take the high and low from (default: 20).
    pub window: usize,
    /// Ratios to emit levels for, strictly increasing.
    pub ratios: Vec<f64>,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            window: 20,
            ratios: DEFAULT_RATIOS.to_vec(),
        }
    }
}

impl FibonacciConfig {
    /// Create a configuration with the default ratios.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Set the trailing window.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Replace the ratios.
    #[must_use]
    pub fn with_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.ratios = ratios;
        self
    }
}

impl IndicatorConfig for FibonacciConfig {
    fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        if self.ratios.is_empty() {
            return Err(IndicatorError::invalid_parameter(
                "ratios",
                "[]",
                "at least one ratio",
            ));
        }
        if let Some(&bad) = self.ratios.iter().find(|r| !r.is_finite()) {
            return Err(IndicatorError::invalid_parameter(
                "ratios",
                bad,
                "finite ratios",
            ));
        }
        if let Some(pair) = self.ratios.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(IndicatorError::invalid_parameter(
                "ratios",
                format!("{} after {}", pair[1], pair[0]),
                "strictly increasing ratios",
            ));
        }
        Ok(())
    }
}

/// One retracement level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct FibonacciLevel<T: TaFloat> {
    /// Retracement ratio.
    pub ratio: f64,
    /// Price at `low + (high - low) * ratio`.
    pub price: T,
}

/// Retracement levels for the trailing window ending at the final bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct FibonacciLevels<T: TaFloat> {
    /// Highest high in the window.
    pub high: T,
    /// Lowest low in the window.
    pub low: T,
    /// Levels in ratio order.
    pub levels: Vec<FibonacciLevel<T>>,
}

/// Fibonacci retracement calculator.
///
/// # Formula
///
/// ```text
/// High  = max(High) over the last `window` bars
/// Low   = min(Low) over the last `window` bars
/// Level = Low + (High - Low) * ratio
/// ```
///
/// Uses every bar when the series is shorter than the window. Ratio 0 maps
/// to `Low` and ratio 1 to `High` exactly.
#[derive(Debug, Clone)]
pub struct Fibonacci<T: TaFloat> {
    config: FibonacciConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Fibonacci<T> {
    /// Compute the levels for a known high and low.
    #[must_use]
    pub fn levels_between(&self, high: T, low: T) -> FibonacciLevels<T> {
        let range = high - low;
        let levels = self
            .config
            .ratios
            .iter()
            .map(|&ratio| {
                let price = if ratio == 0.0 {
                    low
                } else if ratio == 1.0 {
                    high
                } else {
                    low + range * T::from_f64_lossy(ratio)
                };
                FibonacciLevel { ratio, price }
            })
            .collect();

        FibonacciLevels { high, low, levels }
    }
}

impl<T: TaFloat> Indicator<T> for Fibonacci<T> {
    type Output = FibonacciLevels<T>;
    type Config = FibonacciConfig;

    fn new(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        self.ensure_ready(data)?;

        let start = data.len().saturating_sub(self.config.window);
        let high = data.high().as_slice()[start..]
            .iter()
            .copied()
            .fold(T::NEG_INFINITY, T::max);
        let low = data.low().as_slice()[start..]
            .iter()
            .copied()
            .fold(T::INFINITY, T::min);

        Ok(self.levels_between(high, low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ta_core::ohlcv::Bar;

    fn create_test_series(ranges: &[(f64, f64)]) -> PriceSeries<f64> {
        let bars = ranges
            .iter()
            .enumerate()
            .map(|(i, &(h, l))| Bar::new(i as i64, l, h, l, h, 1000.0))
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn test_fibonacci_default_config() {
        let config = FibonacciConfig::default();
        assert_eq!(config.window, 20);
        assert_eq!(config.ratios, DEFAULT_RATIOS.to_vec());
    }

    #[test]
    fn test_fibonacci_invalid_ratios() {
        let bad = [
            FibonacciConfig::default().with_ratios(vec![]),
            FibonacciConfig::default().with_ratios(vec![0.0, f64::INFINITY]),
            FibonacciConfig::default().with_ratios(vec![0.0, 0.5, 0.5]),
            FibonacciConfig::default().with_ratios(vec![0.618, 0.382]),
            FibonacciConfig::new(0),
        ];
        for config in bad {
            assert!(Fibonacci::<f64>::new(config).is_err());
        }
    }

    #[test]
    fn test_fibonacci_known_levels() {
        let fib = Fibonacci::<f64>::new(FibonacciConfig::default()).unwrap();
        let result = fib.calculate(&create_test_series(&[(110.0, 100.0), (200.0, 150.0)])).unwrap();

        assert_eq!(result.high, 200.0);
        assert_eq!(result.low, 100.0);
        assert_eq!(result.levels.len(), 7);
        assert_eq!(result.levels[0].price, 100.0);
        assert_relative_eq!(result.levels[1].price, 123.6, epsilon = 1e-9);
        assert_relative_eq!(result.levels[3].price, 150.0, epsilon = 1e-9);
        assert_relative_eq!(result.levels[4].price, 161.8, epsilon = 1e-9);
        assert_eq!(result.levels[6].price, 200.0);
    }

    #[test]
    fn test_fibonacci_uses_trailing_window() {
        let fib = Fibonacci::<f64>::new(FibonacciConfig::new(2)).unwrap();
        let data = create_test_series(&[(500.0, 1.0), (20.0, 10.0), (30.0, 15.0)]);
        let result = fib.calculate(&data).unwrap();

        assert_eq!(result.high, 30.0);
        assert_eq!(result.low, 10.0);
    }

    #[test]
    fn test_fibonacci_exact_endpoints() {
        let fib = Fibonacci::<f64>::new(FibonacciConfig::default()).unwrap();
        let result = fib.levels_between(0.3, 0.1);

        assert_eq!(result.levels.first().map(|l| l.price), Some(0.1));
        assert_eq!(result.levels.last().map(|l| l.price), Some(0.3));
        for pair in result.levels.windows(2) {
            assert!(pair[1].price >= pair[0].price);
        }
    }
}
