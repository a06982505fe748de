//! Whole-series price statistics.

use ta_core::{
    error::IndicatorError,
    ohlcv::PriceSeries,
    utils::{pct_change, sma},
};

use crate::config::SummaryConfig;
use crate::reading::{finite, latest, Reading, Unavailable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bars needed for a sample standard deviation of returns.
const VOLATILITY_MIN_BARS: usize = 3;

/// Price and volume statistics over the full series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceSummary {
    /// Final close.
    pub current_price: Reading<f64>,
    /// Percent change from the first close to the final close.
    pub price_change_pct: Reading<f64>,
    /// Mean volume.
    pub average_volume: Reading<f64>,
    /// Sample standard deviation of bar-to-bar close returns, in percent.
    pub volatility_pct: Reading<f64>,
    /// Latest short simple moving average of the close.
    pub short_ma: Reading<f64>,
    /// Latest long simple moving average of the close.
    pub long_ma: Reading<f64>,
}

impl PriceSummary {
    /// Summarize a validated series.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::NumericError`] if a statistic overflows.
    pub fn from_series(
        series: &PriceSeries<f64>,
        config: &SummaryConfig,
    ) -> Result<Self, IndicatorError> {
        let closes = series.close().as_slice();
        let volumes = series.volume().as_slice();
        let n = series.len();

        let current_price = match closes.last() {
            Some(&close) => Reading::Available(finite("current_price", close)?),
            None => Reading::insufficient(1, 0),
        };

        let price_change_pct = match (closes.first(), closes.last()) {
            (Some(&first), _) if first == 0.0 => Reading::Unavailable(Unavailable::ZeroReference),
            (Some(&first), Some(&last)) => Reading::Available(finite(
                "price_change_pct",
                (last - first) / first * 100.0,
            )?),
            _ => Reading::insufficient(1, n),
        };

        let average_volume = if volumes.is_empty() {
            Reading::insufficient(1, 0)
        } else {
            let mean = volumes.iter().sum::<f64>() / n as f64;
            Reading::Available(finite("average_volume", mean)?)
        };

        Ok(Self {
            current_price,
            price_change_pct,
            average_volume,
            volatility_pct: volatility_pct(closes)?,
            short_ma: latest("short_ma", &sma(closes, config.short_ma), config.short_ma)?,
            long_ma: latest("long_ma", &sma(closes, config.long_ma), config.long_ma)?,
        })
    }
}

/// Sample standard deviation of close-to-close returns, times 100.
fn volatility_pct(closes: &[f64]) -> Result<Reading<f64>, IndicatorError> {
    if closes.len() < VOLATILITY_MIN_BARS {
        return Ok(Reading::insufficient(VOLATILITY_MIN_BARS, closes.len()));
    }
    if closes[..closes.len() - 1].iter().any(|&c| c == 0.0) {
        return Ok(Reading::Unavailable(Unavailable::ZeroReference));
    }

    let changes = pct_change(closes, 1);
    let returns = &changes.as_slice()[1..];
    let count = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / count;
    let m2: f64 = returns.iter().map(|r| (r - mean) * (r - mean)).sum();

    finite("volatility_pct", (m2 / (count - 1.0)).sqrt() * 100.0).map(Reading::Available)
}
