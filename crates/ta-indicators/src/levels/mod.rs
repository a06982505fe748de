//! Price level calculators.
//!
//! This module contains window-level (not per-bar) calculators:
//! - Fibonacci retracement

mod fibonacci;

pub use fibonacci::{Fibonacci, FibonacciConfig, FibonacciLevel, FibonacciLevels, DEFAULT_RATIOS};
