//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - RSI (Relative Strength Index)
//! - Stochastic Oscillator

mod rsi;
mod stochastic;

pub use rsi::{Rsi, RsiConfig};
pub use stochastic::{Stochastic, StochasticConfig, StochasticSeries};
