//! Error types for series validation and indicator computation.
//!
//! This module provides structured error types with full error chaining
//! support via `thiserror`.

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Invariant violations found while validating a price series.
///
/// Every variant except [`SeriesError::Empty`] carries the index of the first
/// offending bar. Values are reported as `f64` regardless of the series type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// The series has no bars.
    #[error("Invalid series: at least one bar is required")]
    Empty,

    /// A price or volume is NaN or infinite.
    #[error("Invalid series: bar {index} has a non-finite {field}")]
    NonFinite {
        /// Index of the offending bar.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },

    /// The high is below the low.
    #[error("Invalid series: bar {index} has high {high} below low {low}")]
    HighBelowLow {
        /// Index of the offending bar.
        index: usize,
        /// High price.
        high: f64,
        /// Low price.
        low: f64,
    },

    /// The open or close lies outside the bar's `[low, high]` range.
    #[error("Invalid series: bar {index} has {field} {value} outside [{low}, {high}]")]
    OutsideRange {
        /// Index of the offending bar.
        index: usize,
        /// Either `"open"` or `"close"`.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Bar low.
        low: f64,
        /// Bar high.
        high: f64,
    },

    /// The volume is negative.
    #[error("Invalid series: bar {index} has negative volume {volume}")]
    NegativeVolume {
        /// Index of the offending bar.
        index: usize,
        /// Offending volume.
        volume: f64,
    },

    /// Timestamps are not strictly increasing.
    #[error("Invalid series: bar {index} timestamp {current} does not follow {previous}")]
    NonMonotonicTimestamp {
        /// Index of the offending bar.
        index: usize,
        /// Timestamp of the preceding bar.
        previous: i64,
        /// Timestamp of the offending bar.
        current: i64,
    },
}

/// Errors that can occur during indicator computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Not enough data points to compute the indicator.
    #[error("Insufficient data: need {required} points, got {actual}")]
    InsufficientData {
        /// Required number of data points.
        required: usize,
        /// Actual number of data points provided.
        actual: usize,
    },

    /// Invalid window size parameter.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Input slices that must line up have different lengths.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A computed value overflowed to infinity or NaN.
    #[error("Numeric error: {0}")]
    NumericError(String),

    /// The input series violates the OHLCV invariants.
    #[error(transparent)]
    InvalidSeries(#[from] SeriesError),
}

impl IndicatorError {
    /// Build an [`IndicatorError::InvalidParameter`] from any displayable value.
    #[must_use]
    pub fn invalid_parameter(
        name: &'static str,
        value: impl core::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
