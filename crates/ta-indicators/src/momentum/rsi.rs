//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
    utils::{diff, sma},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Set the lookback period.
    #[must_use]
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }
}

impl IndicatorConfig for RsiConfig {
    fn validate(&self) -> Result<()> {
        if self.period == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// ```text
/// delta    = close[t] - close[t-1]
/// AvgGain  = SMA(max(delta, 0), period)
/// AvgLoss  = SMA(max(-delta, 0), period)
/// RSI      = 100 - 100 / (1 + AvgGain / AvgLoss)
/// ```
///
/// The first bar has no delta, so the first value is defined at index
/// `period` (`period + 1` bars).
///
/// # Edge Cases
///
/// - AvgGain = 0 AND AvgLoss = 0 → RSI = 50 (neutral)
/// - AvgGain > 0 AND AvgLoss = 0 → RSI = 100
/// - AvgGain = 0 AND AvgLoss > 0 → RSI = 0
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Rsi<T> {
    /// Compute RSI from average gain and loss.
    fn compute_rsi(avg_gain: T, avg_loss: T) -> T {
        // Rolling means of non-negative values can drift a hair below zero.
        let avg_gain = avg_gain.max(T::ZERO);
        let avg_loss = avg_loss.max(T::ZERO);

        if avg_loss == T::ZERO {
            if avg_gain == T::ZERO {
                T::FIFTY
            } else {
                T::HUNDRED
            }
        } else if avg_gain == T::ZERO {
            T::ZERO
        } else {
            let rs = avg_gain / avg_loss;
            T::HUNDRED - (T::HUNDRED / (T::ONE + rs))
        }
    }
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Output = Series<T>;
    type Config = RsiConfig;

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
        self.config.period + 1
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let deltas = diff(data.close().as_slice(), 1);

        // NaN stays NaN so the rolling mean starts after the first delta.
        let gains: Vec<T> = deltas
            .iter()
            .map(|&d| if d.is_nan() { d } else { d.max(T::ZERO) })
            .collect();
        let losses: Vec<T> = deltas
            .iter()
            .map(|&d| if d.is_nan() { d } else { (-d).max(T::ZERO) })
            .collect();

        let avg_gain = sma(&gains, self.config.period);
        let avg_loss = sma(&losses, self.config.period);

        Ok(avg_gain.zip_with(&avg_loss, |gain, loss| {
            if gain.is_nan() || loss.is_nan() {
                T::NAN
            } else {
                Self::compute_rsi(gain, loss)
            }
        }))
    }
}
