//! # ta-analysis
//!
//! Turns a [`PriceSeries`](ta_core::PriceSeries) into an immutable
//! [`IndicatorSnapshot`]: the latest RSI, MACD, Bollinger Bands, Stochastic,
//! OBV, ATR and Fibonacci levels, plus a [`PriceSummary`].
//!
//! Every scalar in the snapshot is a [`Reading`]. A series too short for an
//! indicator's window marks that field unavailable; the rest of the snapshot
//! is still produced. An invalid series is rejected before anything runs.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Serializable snapshots and JSON configuration
//! - `parallel` - Evaluate indicator families concurrently with rayon
//!
//! ## Example
//!
//! ```
//! use ta_analysis::prelude::*;
//!
//! let bars: Vec<Bar<f64>> = (1..=30)
//!     .map(|i| Bar::flat(i, i as f64, 1_000.0))
//!     .collect();
//! let snapshot = Analyzer::new(AnalysisConfig::default())
//!     .unwrap()
//!     .analyze_bars(bars)
//!     .unwrap();
//!
//! assert_eq!(snapshot.obv.value, Reading::Available(30_000.0));
//! assert!(snapshot.macd.histogram.value().is_some_and(|h| *h > 0.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod prelude;
pub mod reading;
pub mod snapshot;
pub mod summary;

pub use analyzer::{analyze, Analyzer};
pub use config::{AnalysisConfig, SummaryConfig};
pub use error::{AnalysisError, ConfigError, Result};
pub use reading::{Reading, Unavailable};
pub use snapshot::{
    AtrSnapshot, BollingerSnapshot, FibonacciSnapshot, IndicatorSnapshot, MacdSnapshot,
    ObvSnapshot, RsiSnapshot, StochasticSnapshot,
};
pub use summary::PriceSummary;
