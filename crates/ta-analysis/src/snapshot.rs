//! The immutable result of one analysis call.
//!
//! One record per indicator family; every scalar is a [`Reading`].

use indexmap::IndexMap;
use ta_indicators::prelude::FibonacciLevel;

use crate::reading::Reading;
use crate::summary::PriceSummary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latest RSI.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiSnapshot {
    /// RSI in `[0, 100]`.
    pub value: Reading<f64>,
}

/// Latest MACD components.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdSnapshot {
    /// Fast EMA minus slow EMA.
    pub macd: Reading<f64>,
    /// EMA of the MACD line.
    pub signal: Reading<f64>,
    /// MACD minus signal.
    pub histogram: Reading<f64>,
}

/// Latest Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerSnapshot {
    /// Upper band.
    pub upper: Reading<f64>,
    /// Middle band (SMA).
    pub middle: Reading<f64>,
    /// Lower band.
    pub lower: Reading<f64>,
}

/// Latest Stochastic Oscillator.
///
/// `%D` needs `k_period + d_period - 1` bars, so it can be unavailable while
/// `%K` is present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StochasticSnapshot {
    /// %K.
    pub k: Reading<f64>,
    /// %D.
    pub d: Reading<f64>,
}

/// Final OBV accumulator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObvSnapshot {
    /// OBV.
    pub value: Reading<f64>,
}

/// Latest ATR.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtrSnapshot {
    /// ATR.
    pub value: Reading<f64>,
}

/// Retracement levels over the trailing window.
///
/// Always available: it needs a single bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FibonacciSnapshot {
    /// Window high.
    pub high: f64,
    /// Window low.
    pub low: f64,
    /// Levels in increasing ratio order.
    pub levels: Vec<FibonacciLevel<f64>>,
}

impl FibonacciSnapshot {
    /// Format a ratio as a map key: `0.0`, `0.236`, `1.0`.
    #[must_use]
    pub fn ratio_label(ratio: f64) -> String {
        format!("{ratio:?}")
    }

    /// Levels keyed by ratio label, in ratio order.
    ///
    /// ```
    /// use ta_analysis::FibonacciSnapshot;
    /// use ta_indicators::prelude::FibonacciLevel;
    ///
    /// let fib = FibonacciSnapshot {
    ///     high: 200.0,
    ///     low: 100.0,
    ///     levels: vec![
    ///         FibonacciLevel { ratio: 0.0, price: 100.0 },
    ///         FibonacciLevel { ratio: 0.5, price: 150.0 },
    ///         FibonacciLevel { ratio: 1.0, price: 200.0 },
    ///     ],
    /// };
    /// let map = fib.as_map();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["0.0", "0.5", "1.0"]);
    /// assert_eq!(map["0.5"], 150.0);
    /// ```
    #[must_use]
    pub fn as_map(&self) -> IndexMap<String, f64> {
        self.levels
            .iter()
            .map(|level| (Self::ratio_label(level.ratio), level.price))
            .collect()
    }

    /// Price at a given ratio, if configured.
    #[must_use]
    pub fn level(&self, ratio: f64) -> Option<f64> {
        self.levels
            .iter()
            .find(|level| level.ratio == ratio)
            .map(|level| level.price)
    }
}

/// Every indicator family for one price series, as of its final bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorSnapshot {
    /// Number of bars analyzed.
    pub bars: usize,
    /// Timestamp of the final bar.
    pub as_of: i64,
    /// Relative Strength Index.
    pub rsi: RsiSnapshot,
    /// Moving Average Convergence Divergence.
    pub macd: MacdSnapshot,
    /// Bollinger Bands.
    pub bollinger_bands: BollingerSnapshot,
    /// Stochastic Oscillator.
    pub stochastic: StochasticSnapshot,
    /// On-Balance Volume.
    pub obv: ObvSnapshot,
    /// Average True Range.
    pub atr: AtrSnapshot,
    /// Fibonacci retracement.
    pub fibonacci: FibonacciSnapshot,
    /// Whole-series price statistics.
    pub summary: PriceSummary,
}
