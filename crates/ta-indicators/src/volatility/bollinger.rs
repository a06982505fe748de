//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
    utils::rolling_mean_std,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub num_std: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            window: 20,
            num_std: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    #[must_use]
    pub fn new(window: usize, num_std: f64) -> Self {
        Self { window, num_std }
    }

    /// Set the window size.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the band width in standard deviations.
    #[must_use]
    pub fn with_num_std(mut self, num_std: f64) -> Self {
        self.num_std = num_std;
        self
    }
}

impl IndicatorConfig for BollingerConfig {
    fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        if self.window < 2 {
            return Err(IndicatorError::invalid_parameter(
                "window",
                self.window,
                "at least 2 for a sample standard deviation",
            ));
        }
        if !self.num_std.is_finite() || self.num_std <= 0.0 {
            return Err(IndicatorError::invalid_parameter(
                "num_std",
                self.num_std,
                "positive finite number",
            ));
        }
        Ok(())
    }
}

/// Upper, middle and lower band series.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries<T: TaFloat> {
    /// Upper band (middle + k * std).
    pub upper: Series<T>,
    /// Middle band (SMA).
    pub middle: Series<T>,
    /// Lower band (middle - k * std).
    pub lower: Series<T>,
}

/// Bollinger Bands indicator.
///
/// # Formula
///
/// ```text
/// Middle = SMA(Close, window)
/// Upper  = Middle + k * StdDev(Close, window)
/// Lower  = Middle - k * StdDev(Close, window)
/// ```
///
/// StdDev is the sample standard deviation (divisor `window - 1`). Bands
/// are ordered `Upper >= Middle >= Lower` and coincide on a constant window.
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Output = BollingerSeries<T>;
    type Config = BollingerConfig;

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
        self.config.window
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let k = T::from_f64_lossy(self.config.num_std);
        let (middle, std) = rolling_mean_std(data.close().as_slice(), self.config.window);

        let upper = middle.zip_with(&std, |m, s| m + k * s);
        let lower = middle.zip_with(&std, |m, s| m - k * s);

        Ok(BollingerSeries {
            upper,
            middle,
            lower,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ta_core::ohlcv::Bar;

    fn series_from_closes(closes: &[f64]) -> PriceSeries<f64> {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar::flat(i as i64, close, 1000.0))
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn test_bollinger_default_config() {
        let config = BollingerConfig::default();
        assert_eq!(config.window, 20);
        assert_eq!(config.num_std, 2.0);
    }

    #[test]
    fn test_bollinger_invalid_config() {
        assert!(matches!(
            BollingerBands::<f64>::new(BollingerConfig::new(0, 2.0)),
            Err(IndicatorError::InvalidWindow(0))
        ));
        assert!(matches!(
            BollingerBands::<f64>::new(BollingerConfig::new(1, 2.0)),
            Err(IndicatorError::InvalidParameter { name: "window", .. })
        ));
        assert!(BollingerBands::<f64>::new(BollingerConfig::new(20, 0.0)).is_err());
        assert!(BollingerBands::<f64>::new(BollingerConfig::new(20, f64::NAN)).is_err());
    }

    #[test]
    fn test_bollinger_known_values() {
        let bb = BollingerBands::<f64>::new(BollingerConfig::new(3, 2.0)).unwrap();
        let result = bb.calculate(&series_from_closes(&[2.0, 4.0, 6.0])).unwrap();

        // mean 4, sample std 2
        assert_relative_eq!(result.middle[2], 4.0, epsilon = 1e-12);
        assert_relative_eq!(result.upper[2], 8.0, epsilon = 1e-12);
        assert_relative_eq!(result.lower[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bollinger_constant_price() {
        let bb = BollingerBands::<f64>::new(BollingerConfig::default()).unwrap();
        let result = bb.calculate(&series_from_closes(&[100.0; 30])).unwrap();

        assert_eq!(result.upper.latest(), Some(100.0));
        assert_eq!(result.middle.latest(), Some(100.0));
        assert_eq!(result.lower.latest(), Some(100.0));
    }

    #[test]
    fn test_bollinger_flat_tail_after_movement() {
        let bb = BollingerBands::<f64>::new(BollingerConfig::default()).unwrap();
        for prefix in 1..30 {
            let mut closes: Vec<f64> = (0..prefix)
                .map(|i| 100.0 + (i as f64 * 1.3).sin() * 4.0)
                .collect();
            closes.extend([100.0; 30]);
            let result = bb.calculate(&series_from_closes(&closes)).unwrap();

            assert_eq!(result.upper.latest(), Some(100.0), "prefix {prefix}");
            assert_eq!(result.middle.latest(), Some(100.0), "prefix {prefix}");
            assert_eq!(result.lower.latest(), Some(100.0), "prefix {prefix}");
        }
    }

    #[test]
    fn test_bollinger_short_series() {
        let bb = BollingerBands::<f64>::new(BollingerConfig::default()).unwrap();
        let result = bb.calculate(&series_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();

        assert_eq!(result.middle.len(), 5);
        assert_eq!(result.middle.latest(), None);
        assert_eq!(result.upper.latest(), None);
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let bb = BollingerBands::<f64>::new(BollingerConfig::new(5, 2.0)).unwrap();
        let closes: Vec<f64> = (0..40).map(|i| 50.0 + (i as f64 * 0.7).cos() * 3.0).collect();
        let result = bb.calculate(&series_from_closes(&closes)).unwrap();

        for i in 4..closes.len() {
            assert!(result.upper[i] >= result.middle[i]);
            assert!(result.middle[i] >= result.lower[i]);
        }
    }
}
