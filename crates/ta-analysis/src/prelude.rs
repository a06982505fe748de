//! Prelude for ta-analysis.
//!
//! Re-exports the analyzer, its configuration and result types, together
//! with the `ta-core` data model needed to build a series.

pub use crate::analyzer::{analyze, Analyzer};
pub use crate::config::{AnalysisConfig, SummaryConfig};
pub use crate::error::{AnalysisError, ConfigError, Result};
pub use crate::reading::{Reading, Unavailable};
pub use crate::snapshot::{
    AtrSnapshot, BollingerSnapshot, FibonacciSnapshot, IndicatorSnapshot, MacdSnapshot,
    ObvSnapshot, RsiSnapshot, StochasticSnapshot,
};
pub use crate::summary::PriceSummary;

pub use ta_core::ohlcv::{Bar, PriceSeries};
pub use ta_core::error::SeriesError;
