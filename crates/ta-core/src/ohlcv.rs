//! OHLCV (Open, High, Low, Close, Volume) data types.
//!
//! [`Bar`] is a single trading-period observation. [`PriceSeries`] is an
//! immutable, validated, columnar sequence of bars: once constructed it is
//! guaranteed non-empty, finite, internally consistent and strictly ordered in
//! time, so calculators never have to re-check their input.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;
use crate::num::TaFloat;
use crate::series::Series;

/// A single OHLCV price bar.
///
/// # Invariants
///
/// A valid bar satisfies:
/// - all values are finite
/// - `low <= open <= high`
/// - `low <= close <= high`
/// - `volume >= 0`
///
/// # Example
///
/// ```rust
/// use ta_core::Bar;
///
/// let bar = Bar::new(1_700_000_000_000, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert!(bar.validate(0).is_ok());
/// assert_eq!(bar.range(), 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Bar<T: TaFloat> {
    /// Period timestamp (Unix epoch in milliseconds).
    pub timestamp: i64,
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume during the period.
    pub volume: T,
}

impl<T: TaFloat> Bar<T> {
    /// Create a new bar.
    #[must_use]
    pub fn new(timestamp: i64, open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a bar whose four prices all equal `price`.
    #[must_use]
    pub fn flat(timestamp: i64, price: T, volume: T) -> Self {
        Self::new(timestamp, price, price, price, price, volume)
    }

    /// Check the bar's own invariants, reporting `index` in any error.
    ///
    /// Timestamp ordering is a property of the series and is checked by
    /// [`PriceSeries::new`].
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self, index: usize) -> Result<(), SeriesError> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_valid()) {
            return Err(SeriesError::NonFinite { index, field });
        }

        let high = self.high.to_f64_lossy();
        let low = self.low.to_f64_lossy();
        if self.high < self.low {
            return Err(SeriesError::HighBelowLow { index, high, low });
        }

        for (field, value) in [("open", self.open), ("close", self.close)] {
            if value < self.low || value > self.high {
                return Err(SeriesError::OutsideRange {
                    index,
                    field,
                    value: value.to_f64_lossy(),
                    low,
                    high,
                });
            }
        }

        if self.volume < T::ZERO {
            return Err(SeriesError::NegativeVolume {
                index,
                volume: self.volume.to_f64_lossy(),
            });
        }

        Ok(())
    }

    /// Compute the bar's range: High - Low.
    #[must_use]
    pub fn range(&self) -> T {
        self.high - self.low
    }
}

/// A validated, immutable, columnar series of OHLCV bars.
///
/// Construction is the only place the data-model invariants are checked;
/// there is deliberately no way to append to or mutate a `PriceSeries`.
///
/// # Example
///
/// ```rust
/// use ta_core::{Bar, PriceSeries};
///
/// let series = PriceSeries::new(vec![
///     Bar::new(1, 100.0, 105.0, 98.0, 103.0, 1_000_000.0),
///     Bar::new(2, 103.0, 108.0, 101.0, 107.0, 1_200_000.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct PriceSeries<T: TaFloat> {
    timestamps: Vec<i64>,
    open: Series<T>,
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
    volume: Series<T>,
}

impl<T: TaFloat> PriceSeries<T> {
    /// Validate `bars` and build a series from them.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError`] for the first invariant violation found, scanning
    /// bars in order. No series is produced on failure.
    pub fn new(bars: Vec<Bar<T>>) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }

        let mut previous: Option<i64> = None;
        for (index, bar) in bars.iter().enumerate() {
            bar.validate(index)?;
            if let Some(previous) = previous {
                if bar.timestamp <= previous {
                    return Err(SeriesError::NonMonotonicTimestamp {
                        index,
                        previous,
                        current: bar.timestamp,
                    });
                }
            }
            previous = Some(bar.timestamp);
        }

        let len = bars.len();
        let mut series = Self {
            timestamps: Vec::with_capacity(len),
            open: Series::with_capacity(len),
            high: Series::with_capacity(len),
            low: Series::with_capacity(len),
            close: Series::with_capacity(len),
            volume: Series::with_capacity(len),
        };
        for bar in bars {
            series.timestamps.push(bar.timestamp);
            series.open.push(bar.open);
            series.high.push(bar.high);
            series.low.push(bar.low);
            series.close.push(bar.close);
            series.volume.push(bar.volume);
        }
        Ok(series)
    }

    /// Returns the number of bars in the series (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Always `false`: an empty series cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Get a bar at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar<T>> {
        if index >= self.len() {
            return None;
        }

        Some(Bar {
            timestamp: self.timestamps[index],
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Get the final bar.
    #[must_use]
    pub fn last(&self) -> Bar<T> {
        let last = self.len() - 1;
        Bar {
            timestamp: self.timestamps[last],
            open: self.open[last],
            high: self.high[last],
            low: self.low[last],
            close: self.close[last],
            volume: self.volume[last],
        }
    }

    /// Returns the timestamps (Unix epoch in milliseconds).
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the open prices.
    #[must_use]
    pub fn open(&self) -> &Series<T> {
        &self.open
    }

    /// Returns the high prices.
    #[must_use]
    pub fn high(&self) -> &Series<T> {
        &self.high
    }

    /// Returns the low prices.
    #[must_use]
    pub fn low(&self) -> &Series<T> {
        &self.low
    }

    /// Returns the close prices.
    #[must_use]
    pub fn close(&self) -> &Series<T> {
        &self.close
    }

    /// Returns the volumes.
    #[must_use]
    pub fn volume(&self) -> &Series<T> {
        &self.volume
    }

    /// Returns an iterator over the bars in time order.
    pub fn iter(&self) -> impl Iterator<Item = Bar<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl<T: TaFloat> TryFrom<Vec<Bar<T>>> for PriceSeries<T> {
    type Error = SeriesError;

    fn try_from(bars: Vec<Bar<T>>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TaFloat> Deserialize<'de> for PriceSeries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bars = Vec::<Bar<T>>::deserialize(deserializer)?;
        Self::new(bars).map_err(serde::de::Error::custom)
    }
}
