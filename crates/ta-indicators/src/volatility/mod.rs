//! Volatility indicators.
//!
//! This module contains volatility indicators:
//! - Bollinger Bands
//! - ATR (Average True Range)

mod atr;
mod bollinger;

pub use atr::{Atr, AtrConfig};
pub use bollinger::{BollingerBands, BollingerConfig, BollingerSeries};
