//! Prelude for ta-indicators.
//!
//! This module re-exports all commonly used types and traits.

// Momentum indicators
pub use crate::momentum::{Rsi, RsiConfig, Stochastic, StochasticConfig, StochasticSeries};

// Trend indicators
pub use crate::trend::{Ema, EmaConfig, Macd, MacdConfig, MacdSeries};

// Volatility indicators
pub use crate::volatility::{Atr, AtrConfig, BollingerBands, BollingerConfig, BollingerSeries};

// Volume indicators
pub use crate::volume::{Obv, ObvConfig};

// Price levels
pub use crate::levels::{Fibonacci, FibonacciConfig, FibonacciLevel, FibonacciLevels};

pub use ta_core::traits::{Indicator, IndicatorConfig};
