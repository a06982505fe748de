//! On Balance Volume (OBV) indicator.
//!
//! OBV is a momentum indicator that uses volume flow to predict price changes.

use core::iter;
use core::marker::PhantomData;

use ta_core::{
    error::Result,
    num::TaFloat,
    ohlcv::PriceSeries,
    series::Series,
    traits::{Indicator, IndicatorConfig},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the OBV indicator. OBV has no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObvConfig {}

impl ObvConfig {
    /// Create a new OBV configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndicatorConfig for ObvConfig {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// On Balance Volume indicator.
///
/// # Formula
///
/// ```text
/// OBV(0) = Volume(0)
/// OBV(t) = OBV(t-1) + Volume(t)  if Close(t) > Close(t-1)
/// OBV(t) = OBV(t-1) - Volume(t)  if Close(t) < Close(t-1)
/// OBV(t) = OBV(t-1)              otherwise
/// ```
///
/// A strictly sequential scan: every value depends on the one before it.
#[derive(Debug, Clone)]
pub struct Obv<T: TaFloat> {
    config: ObvConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Obv<T> {
    type Output = Series<T>;
    type Config = ObvConfig;

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
        let close = data.close().as_slice();
        let volume = data.volume().as_slice();
        let (Some(&seed), Some(rest)) = (volume.first(), volume.get(1..)) else {
            return Ok(Series::new());
        };

        let flows = close.windows(2).zip(rest).scan(seed, |obv, (pair, &vol)| {
            if pair[1] > pair[0] {
                *obv = *obv + vol;
            } else if pair[1] < pair[0] {
                *obv = *obv - vol;
            }
            Some(*obv)
        });

        Ok(iter::once(seed).chain(flows).collect())
    }
}
