//! Core trait definitions for indicator calculators.
//!
//! Every calculator in `ta-indicators` implements [`Indicator`]: it is built
//! from a validated configuration and computes a full output series over a
//! [`PriceSeries`] in one batch pass.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::ohlcv::PriceSeries;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {
    /// Check the parameters, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] or
    /// [`IndicatorError::InvalidParameter`] describing the bad value.
    fn validate(&self) -> Result<()>;
}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {
    /// Check the parameters, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] or
    /// [`IndicatorError::InvalidParameter`] describing the bad value.
    fn validate(&self) -> Result<()>;
}

/// Core trait for technical indicators.
///
/// # Associated Types
///
/// - `Output` - The type returned by calculations, usually one value per bar
/// - `Config` - Configuration parameters
///
/// # Example Implementation
///
/// ```rust,ignore
/// use ta_core::{Indicator, PriceSeries, Result, Series, TaFloat};
///
/// struct Obv<T: TaFloat> {
///     config: ObvConfig,
///     _marker: PhantomData<T>,
/// }
///
/// impl<T: TaFloat> Indicator<T> for Obv<T> {
///     type Output = Series<T>;
///     type Config = ObvConfig;
///
///     fn new(config: Self::Config) -> Result<Self> { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
///     fn min_periods(&self) -> usize { 1 }
///     fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output> { /* ... */ }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync + Sized {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    fn new(config: Self::Config) -> Result<Self>;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Returns the number of bars needed before the final output is defined.
    fn min_periods(&self) -> usize;

    /// Perform batch calculation on a price series.
    ///
    /// Series outputs have one entry per bar, NaN during warm-up. A series
    /// shorter than [`Indicator::min_periods`] is not an error for them: the
    /// output is simply all warm-up.
    ///
    /// # Errors
    ///
    /// Returns an error if computation fails.
    fn calculate(&self, data: &PriceSeries<T>) -> Result<Self::Output>;

    /// Check that `data` is long enough for a defined final value.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InsufficientData`] when it is not.
    fn ensure_ready(&self, data: &PriceSeries<T>) -> Result<()> {
        let required = self.min_periods();
        if data.len() < required {
            return Err(IndicatorError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        Ok(())
    }
}
