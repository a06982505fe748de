//! Average True Range (ATR) indicator.
//!
//! ATR measures market volatility by averaging the true range over a period.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
    utils::{sma, true_range},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the ATR indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtrConfig {
    /// The averaging period (default: 14).
    pub period: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl AtrConfig {
    /// Create a new ATR configuration.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Set the averaging period.
    #[must_use]
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }
}

impl IndicatorConfig for AtrConfig {
    fn validate(&self) -> Result<()> {
        if self.period == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Average True Range indicator.
///
/// # Formula
///
/// ```text
/// TR  = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
/// ATR = SMA(TR, period)
/// ```
///
/// The first bar has no previous close and uses `High - Low`.
#[derive(Debug, Clone)]
pub struct Atr<T: TaFloat> {
    config: AtrConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Atr<T> {
    type Output = Series<T>;
    type Config = AtrConfig;

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
        self.config.period
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> {
        let tr = true_range(
            data.high().as_slice(),
            data.low().as_slice(),
            data.close().as_slice(),
        )?;
        Ok(sma(tr.as_slice(), self.config.period))
    }
}
