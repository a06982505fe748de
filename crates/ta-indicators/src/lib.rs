//! # ta-indicators
//!
//! Technical indicator calculators for the market-ta engine.
//!
//! Calculators are organized into five groups:
//!
//! - **Momentum**: RSI, Stochastic Oscillator
//! - **Trend**: EMA, MACD
//! - **Volatility**: Bollinger Bands, ATR
//! - **Volume**: OBV
//! - **Levels**: Fibonacci retracement
//!
//! Each calculator is built from a validated config and computes its full
//! output over a [`ta_core::PriceSeries`] in one batch pass.
//!
//! # Example
//!
//! ```
//! use ta_core::prelude::*;
//! use ta_indicators::prelude::*;
//!
//! let bars: Vec<Bar<f64>> = (0..30)
//!     .map(|i| Bar::flat(i, 100.0 + i as f64, 1_000.0))
//!     .collect();
//! let series = PriceSeries::new(bars).unwrap();
//!
//! let rsi = Rsi::<f64>::new(RsiConfig::default()).unwrap();
//! let values = rsi.calculate(&series).unwrap();
//! assert_eq!(values.latest(), Some(100.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod levels;
pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

pub use prelude::*;
