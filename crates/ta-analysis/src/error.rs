//! Error types for snapshot assembly.

use ta_core::error::{IndicatorError, SeriesError};
use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = core::result::Result<T, AnalysisError>;

/// A configuration that cannot produce an [`Analyzer`](crate::Analyzer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// One family's parameters failed validation.
    #[error("Invalid {family} configuration: {source}")]
    Invalid {
        /// Indicator family, e.g. `"bollinger_bands"`.
        family: &'static str,
        /// The underlying parameter violation.
        #[source]
        source: IndicatorError,
    },

    /// A JSON configuration document could not be deserialized.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn invalid(family: &'static str) -> impl FnOnce(IndicatorError) -> Self {
        move |source| Self::Invalid { family, source }
    }
}

/// Errors returned by [`Analyzer`](crate::Analyzer).
///
/// Only [`AnalysisError::InvalidSeries`] and [`AnalysisError::Indicator`] can
/// come out of an analysis call; a short series is never an error, it
/// degrades individual fields to unavailable instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The price series violates the OHLCV invariants. No snapshot is built.
    #[error(transparent)]
    InvalidSeries(#[from] SeriesError),

    /// A calculator failed, or produced a non-finite final value.
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
