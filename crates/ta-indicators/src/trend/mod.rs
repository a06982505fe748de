//! Trend indicators.
//!
//! This module contains trend-following indicators:
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod ema;
mod macd;

pub use ema::{Ema, EmaConfig};
pub use macd::{Macd, MacdConfig, MacdSeries};
