//! Analysis configuration.
//!
//! [`AnalysisConfig`] bundles one configuration per indicator family. With
//! the `serde` feature every field falls back to its default, so a JSON
//! document only needs to name what it overrides:
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use ta_analysis::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_json_str(r#"{"rsi": {"period": 7}}"#).unwrap();
//! assert_eq!(config.rsi.period, 7);
//! assert_eq!(config.macd.slow, 26);
//! # }
//! ```

use ta_core::{
    error::{IndicatorError, Result as IndicatorResult},
    traits::IndicatorConfig,
};
use ta_indicators::prelude::{
    AtrConfig, BollingerConfig, FibonacciConfig, MacdConfig, RsiConfig, StochasticConfig,
};

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Moving-average spans for the price summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SummaryConfig {
    /// Short simple moving average span (default: 50).
    pub short_ma: usize,
    /// Long simple moving average span (default: 200).
    pub long_ma: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            short_ma: 50,
            long_ma: 200,
        }
    }
}

impl SummaryConfig {
    /// Create a summary configuration.
    #[must_use]
    pub fn new(short_ma: usize, long_ma: usize) -> Self {
        Self { short_ma, long_ma }
    }
}

impl IndicatorConfig for SummaryConfig {
    fn validate(&self) -> IndicatorResult<()> {
        if self.short_ma == 0 || self.long_ma == 0 {
            return Err(IndicatorError::InvalidWindow(0));
        }
        Ok(())
    }
}

/// Parameters for every calculator the [`Analyzer`](crate::Analyzer) runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// RSI period.
    pub rsi: RsiConfig,
    /// MACD spans.
    pub macd: MacdConfig,
    /// Bollinger window and width.
    pub bollinger_bands: BollingerConfig,
    /// Stochastic %K and %D periods.
    pub stochastic: StochasticConfig,
    /// ATR period.
    pub atr: AtrConfig,
    /// Fibonacci window and ratios.
    pub fibonacci: FibonacciConfig,
    /// Price summary spans.
    pub summary: SummaryConfig,
}

impl AnalysisConfig {
    /// Set the RSI configuration.
    #[must_use]
    pub fn with_rsi(mut self, rsi: RsiConfig) -> Self {
        self.rsi = rsi;
        self
    }

    /// Set the MACD configuration.
    #[must_use]
    pub fn with_macd(mut self, macd: MacdConfig) -> Self {
        self.macd = macd;
        self
    }

    /// Set the Bollinger Bands configuration.
    #[must_use]
    pub fn with_bollinger_bands(mut self, bollinger_bands: BollingerConfig) -> Self {
        self.bollinger_bands = bollinger_bands;
        self
    }

    /// Set the Stochastic configuration.
    #[must_use]
    pub fn with_stochastic(mut self, stochastic: StochasticConfig) -> Self {
        self.stochastic = stochastic;
        self
    }

    /// Set the ATR configuration.
    #[must_use]
    pub fn with_atr(mut self, atr: AtrConfig) -> Self {
        self.atr = atr;
        self
    }

    /// Set the Fibonacci configuration.
    #[must_use]
    pub fn with_fibonacci(mut self, fibonacci: FibonacciConfig) -> Self {
        self.fibonacci = fibonacci;
        self
    }

    /// Set the price summary configuration.
    #[must_use]
    pub fn with_summary(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    /// Validate every family, reporting the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rsi.validate().map_err(ConfigError::invalid("rsi"))?;
        self.macd.validate().map_err(ConfigError::invalid("macd"))?;
        self.bollinger_bands
            .validate()
            .map_err(ConfigError::invalid("bollinger_bands"))?;
        self.stochastic
            .validate()
            .map_err(ConfigError::invalid("stochastic"))?;
        self.atr.validate().map_err(ConfigError::invalid("atr"))?;
        self.fibonacci
            .validate()
            .map_err(ConfigError::invalid("fibonacci"))?;
        self.summary
            .validate()
            .map_err(ConfigError::invalid("summary"))?;
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for parameters that fail validation.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
