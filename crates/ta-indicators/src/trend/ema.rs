//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA gives more weight to recent prices using an exponential
//! smoothing factor.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
    utils::ema,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the EMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaConfig {
    /// The span of the EMA; smoothing factor is `2 / (span + 1)`.
    pub span: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { span: 12 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given span.
    #[must_use]
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    /// Set the span.
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }
}

impl IndicatorConfig for EmaConfig {
    fn validate(&self) -> Result<()> {
        if self.span == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Exponential Moving Average of the close.
///
/// # Formula
///
/// ```text
/// α      = 2 / (span + 1)
/// EMA(0) = Close(0)
/// EMA(t) = EMA(t-1) + α * (Close(t) - EMA(t-1))
/// ```
///
/// Seeding with the first close means every bar has a value; early values
/// simply carry less history.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Ema<T> {
    /// Apply the EMA recurrence to an arbitrary value sequence.
    #[must_use]
    pub fn apply(&self, values: &[T]) -> Series<T> {
        ema(values, self.config.span)
    }
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Output = Series<T>;
    type Config = EmaConfig;

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
        Ok(self.apply(data.close().as_slice()))
    }
}
