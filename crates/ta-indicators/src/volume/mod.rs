//! Volume indicators.
//!
//! This module contains volume-based indicators:
//! - OBV (On-Balance Volume)

mod obv;

pub use obv::{Obv, ObvConfig};
