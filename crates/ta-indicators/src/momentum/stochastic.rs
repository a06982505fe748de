//! Stochastic Oscillator indicator.
//!
//! The Stochastic Oscillator is a momentum indicator comparing a particular
//! closing price to a range of prices over a certain period.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
    utils::{rolling_max, rolling_min, sma},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StochasticConfig {
    /// Lookback period for %K (default: 14).
    pub k_period: usize,
    /// Smoothing period for %D (default: 3).
    pub d_period: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
        }
    }
}

impl StochasticConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(k_period: usize, d_period: usize) -> Self {
        Self { k_period, d_period }
    }

    /// Set the %K lookback period.
    #[must_use]
    pub fn with_k_period(mut self, k_period: usize) -> Self {
        self.k_period = k_period;
        self
    }

    /// Set the %D smoothing period.
    #[must_use]
    pub fn with_d_period(mut self, d_period: usize) -> Self {
        self.d_period = d_period;
        self
    }
}

impl IndicatorConfig for StochasticConfig {
    fn validate(&self) -> Result<()> {
        if self.k_period == 0 || self.d_period == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Full %K and %D series.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries<T: TaFloat> {
    /// %K line (0-100).
    pub k: Series<T>,
    /// %D line (SMA of %K, 0-100).
    pub d: Series<T>,
}

/// Stochastic Oscillator.
///
/// # Formula
///
/// ```text
/// %K = 100 * (Close - LowestLow(k)) / (HighestHigh(k) - LowestLow(k))
/// %D = SMA(%K, d)
/// ```
///
/// A flat range (`HighestHigh == LowestLow`) gives %K = 50.
#[derive(Debug, Clone)]
pub struct Stochastic<T: TaFloat> {
    config: StochasticConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Stochastic<T> {
    /// Bars needed before %D is defined.
    #[must_use]
    pub fn d_min_periods(&self) -> usize {
        self.config.k_period + self.config.d_period - 1
    }
}

impl<T: TaFloat> Indicator<T> for Stochastic<T> {
    type Output = StochasticSeries<T>;
    type Config = StochasticConfig;

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
        self.config.k_period
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let highest = rolling_max(data.high().as_slice(), self.config.k_period);
        let lowest = rolling_min(data.low().as_slice(), self.config.k_period);

        let k: Series<T> = data
            .close()
            .iter()
            .zip(highest.iter().zip(lowest.iter()))
            .map(|(&close, (&high, &low))| {
                if high.is_nan() || low.is_nan() {
                    T::NAN
                } else if high == low {
                    T::FIFTY
                } else {
                    T::HUNDRED * (close - low) / (high - low)
                }
            })
            .collect();
        let d = sma(k.as_slice(), self.config.d_period);

        Ok(StochasticSeries { k, d })
    }
}
