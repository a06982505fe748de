//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator that shows the relationship
//! between two exponential moving averages of prices.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
};

use super::ema::{Ema, EmaConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacdConfig {
    /// Fast EMA span (default: 12).
    pub fast: usize,
    /// Slow EMA span (default: 26).
    pub slow: usize,
    /// Signal line EMA span (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    #[must_use]
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Set the fast EMA span.
    #[must_use]
    pub fn with_fast(mut self, fast: usize) -> Self {
        self.fast = fast;
        self
    }

    /// Set the slow EMA span.
    #[must_use]
    pub fn with_slow(mut self, slow: usize) -> Self {
        self.slow = slow;
        self
    }

    /// Set the signal EMA span.
    #[must_use]
    pub fn with_signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }
}

impl IndicatorConfig for MacdConfig {
    fn validate(&self) -> Result<()> {
        if self.fast == 0 || self.slow == 0 || self.signal == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        if self.fast >= self.slow {
            return Err(IndicatorError::invalid_parameter(
                "fast",
                self.fast,
                "fast span shorter than slow span",
            ));
        }
        Ok(())
    }
}

/// MACD series output containing all three series.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries<T: TaFloat> {
    /// MACD line series.
    pub macd: Series<T>,
    /// Signal line series.
    pub signal: Series<T>,
    /// Histogram series.
    pub histogram: Series<T>,
}

/// Moving Average Convergence Divergence indicator.
///
/// # Formula
///
/// ```text
/// MACD Line   = EMA(Close, fast) - EMA(Close, slow)
/// Signal Line = EMA(MACD Line, signal)
/// Histogram   = MACD Line - Signal Line
/// ```
///
/// All EMAs are seeded with their first input, so every component is
/// defined from the first bar.
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    fast_ema: Ema<T>,
    slow_ema: Ema<T>,
    signal_ema: Ema<T>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Output = MacdSeries<T>;
    type Config = MacdConfig;

    fn new(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fast_ema: Ema::new(EmaConfig::new(config.fast))?,
            slow_ema: Ema::new(EmaConfig::new(config.slow))?,
            signal_ema: Ema::new(EmaConfig::new(config.signal))?,
            config,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let fast = self.fast_ema.calculate(data)?;
        let slow = self.slow_ema.calculate(data)?;

        let macd = fast.zip_with(&slow, |f, s| f - s);
        let signal = self.signal_ema.apply(macd.as_slice());
        let histogram = macd.zip_with(&signal, |m, s| m - s);

        Ok(MacdSeries {
            macd,
            signal,
            histogram,
        })
    }
}
