//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from ta-core.
//!
//! # Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let bar = Bar::new(1_700_000_000, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
//! assert!(bar.validate(0).is_ok());
//! ```

// Core types
pub use crate::num::TaFloat;
pub use crate::ohlcv::{Bar, PriceSeries};
pub use crate::series::Series;
pub use crate::window::{Extreme, MonotonicWindow, RingBuffer};

// Error types
pub use crate::error::{IndicatorError, Result, SeriesError};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig};

// Utility functions
pub use crate::utils::{
    diff, ema, pct_change, rolling_max, rolling_mean_std, rolling_min, rolling_std, sma,
    true_range,
};
