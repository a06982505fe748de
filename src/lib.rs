//! # market-ta
//!
//! Technical-analysis snapshot engine over OHLCV price series.
//!
//! This crate re-exports the workspace:
//!
//! - [`ta_core`] - data model, rolling primitives and the calculator trait
//! - [`ta_indicators`] - RSI, MACD, Bollinger, Stochastic, OBV, ATR, Fibonacci
//! - [`ta_analysis`] - the [`Analyzer`](ta_analysis::Analyzer) and its snapshot
//!
//! ```
//! use market_ta::ta_analysis::prelude::*;
//!
//! let bars: Vec<Bar<f64>> = (0..5).map(|i| Bar::flat(i, 10.0, 1.0)).collect();
//! let snapshot = market_ta::ta_analysis::analyze(&PriceSeries::new(bars).unwrap()).unwrap();
//! assert!(!snapshot.bollinger_bands.middle.is_available());
//! ```

#![deny(unsafe_code)]

pub use ta_analysis;
pub use ta_core;
pub use ta_indicators;
