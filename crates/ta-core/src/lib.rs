//! # ta-core
//!
//! Core types and traits for the market-ta technical analysis engine.
//!
//! This crate provides the foundational abstractions used throughout the workspace:
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Per-bar output container, NaN during warm-up
//! - [`Bar`] and [`PriceSeries`] - Validated OHLCV price data
//! - [`RingBuffer`] and [`MonotonicWindow`] - O(1) rolling-window primitives
//! - [`Indicator`] - Batch calculator trait
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//!
//! let average = sma(closes.as_slice(), 3);
//! assert_eq!(average.warmup_len(), 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod num;
pub mod ohlcv;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;
pub mod window;

// Re-export core types at crate root
pub use error::{IndicatorError, Result, SeriesError};
pub use num::TaFloat;
pub use ohlcv::{Bar, PriceSeries};
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig};
pub use window::{MonotonicWindow, RingBuffer};
