//! The snapshot orchestrator.
//!
//! [`Analyzer`] owns one calculator per indicator family, runs them all over
//! a validated [`PriceSeries`] and reduces each output to its final value.
//! Families are independent of one another; with the `parallel` feature they
//! are evaluated through `rayon::join`, which does not change any result.

use ta_core::{
    error::IndicatorError,
    ohlcv::{Bar, PriceSeries},
    series::Series,
    traits::Indicator,
};
use ta_indicators::prelude::{
    Atr, BollingerBands, BollingerSeries, Fibonacci, FibonacciLevels, Macd, MacdSeries, Obv,
    ObvConfig, Rsi, Stochastic, StochasticSeries,
};
use tracing::{debug, debug_span};

use crate::config::AnalysisConfig;
use crate::error::{ConfigError, Result};
use crate::reading::{finite, latest, Reading};
use crate::snapshot::{
    AtrSnapshot, BollingerSnapshot, FibonacciSnapshot, IndicatorSnapshot, MacdSnapshot,
    ObvSnapshot, RsiSnapshot, StochasticSnapshot,
};
use crate::summary::PriceSummary;

type Computed<V> = core::result::Result<V, IndicatorError>;

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Computes an [`IndicatorSnapshot`] from a price series.
///
/// # Example
///
/// ```
/// use ta_analysis::prelude::*;
///
/// let bars: Vec<Bar<f64>> = (0..30).map(|i| Bar::flat(i, 100.0, 1_000.0)).collect();
/// let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
/// let snapshot = analyzer.analyze_bars(bars).unwrap();
///
/// assert_eq!(snapshot.rsi.value, Reading::Available(50.0));
/// assert_eq!(snapshot.stochastic.k, Reading::Available(50.0));
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    rsi: Rsi<f64>,
    macd: Macd<f64>,
    bollinger: BollingerBands<f64>,
    stochastic: Stochastic<f64>,
    obv: Obv<f64>,
    atr: Atr<f64>,
    fibonacci: Fibonacci<f64>,
}

impl Analyzer {
    /// Build every calculator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`](crate::AnalysisError::Config) naming
    /// the first family whose parameters are invalid.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rsi: Rsi::new(config.rsi.clone()).map_err(ConfigError::invalid("rsi"))?,
            macd: Macd::new(config.macd.clone()).map_err(ConfigError::invalid("macd"))?,
            bollinger: BollingerBands::new(config.bollinger_bands.clone())
                .map_err(ConfigError::invalid("bollinger_bands"))?,
            stochastic: Stochastic::new(config.stochastic.clone())
                .map_err(ConfigError::invalid("stochastic"))?,
            obv: Obv::new(ObvConfig::new()).map_err(ConfigError::invalid("obv"))?,
            atr: Atr::new(config.atr.clone()).map_err(ConfigError::invalid("atr"))?,
            fibonacci: Fibonacci::new(config.fibonacci.clone())
                .map_err(ConfigError::invalid("fibonacci"))?,
            config,
        })
    }

    /// The configuration this analyzer was built from.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate raw bars, then analyze them.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidSeries`](crate::AnalysisError::InvalidSeries)
    /// if any bar breaks the OHLCV invariants; no partial snapshot is produced.
    pub fn analyze_bars(&self, bars: Vec<Bar<f64>>) -> Result<IndicatorSnapshot> {
        let series = PriceSeries::new(bars).map_err(|e| {
            debug!(error = %e, "rejected price series");
            e
        })?;
        self.analyze(&series)
    }

    /// Analyze a validated series.
    ///
    /// Fields whose calculator needs more bars than the series has are
    /// [`Reading::Unavailable`]; everything else is still computed. The same
    /// series always yields an identical snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Indicator`](crate::AnalysisError::Indicator)
    /// if a final value is not finite.
    pub fn analyze(&self, series: &PriceSeries<f64>) -> Result<IndicatorSnapshot> {
        let span = debug_span!("analyze", bars = series.len());
        let _guard = span.enter();

        let ((rsi, macd), ((bollinger, stochastic), ((obv, atr), (fibonacci, summary)))) = join(
            || {
                join(
                    || self.rsi_snapshot(series),
                    || self.macd_snapshot(series),
                )
            },
            || {
                join(
                    || {
                        join(
                            || self.bollinger_snapshot(series),
                            || self.stochastic_snapshot(series),
                        )
                    },
                    || {
                        join(
                            || join(|| self.obv_snapshot(series), || self.atr_snapshot(series)),
                            || {
                                join(
                                    || self.fibonacci_snapshot(series),
                                    || PriceSummary::from_series(series, &self.config.summary),
                                )
                            },
                        )
                    },
                )
            },
        );

        let snapshot = IndicatorSnapshot {
            bars: series.len(),
            as_of: series.last().timestamp,
            rsi: rsi?,
            macd: macd?,
            bollinger_bands: bollinger?,
            stochastic: stochastic?,
            obv: obv?,
            atr: atr?,
            fibonacci: fibonacci?,
            summary: summary?,
        };
        log_unavailable(&snapshot);
        Ok(snapshot)
    }

    fn rsi_snapshot(&self, series: &PriceSeries<f64>) -> Computed<RsiSnapshot> {
        let values = self.rsi.calculate(series)?;
        Ok(RsiSnapshot {
            value: latest("rsi", &values, self.rsi.min_periods())?,
        })
    }

    fn macd_snapshot(&self, series: &PriceSeries<f64>) -> Computed<MacdSnapshot> {
        let MacdSeries {
            macd,
            signal,
            histogram,
        } = self.macd.calculate(series)?;
        let required = self.macd.min_periods();
        Ok(MacdSnapshot {
            macd: latest("macd", &macd, required)?,
            signal: latest("macd signal", &signal, required)?,
            histogram: latest("macd histogram", &histogram, required)?,
        })
    }

    fn bollinger_snapshot(&self, series: &PriceSeries<f64>) -> Computed<BollingerSnapshot> {
        let BollingerSeries {
            upper,
            middle,
            lower,
        } = self.bollinger.calculate(series)?;
        let required = self.bollinger.min_periods();
        Ok(BollingerSnapshot {
            upper: latest("bollinger upper", &upper, required)?,
            middle: latest("bollinger middle", &middle, required)?,
            lower: latest("bollinger lower", &lower, required)?,
        })
    }

    fn stochastic_snapshot(&self, series: &PriceSeries<f64>) -> Computed<StochasticSnapshot> {
        let StochasticSeries { k, d } = self.stochastic.calculate(series)?;
        Ok(StochasticSnapshot {
            k: latest("stochastic %K", &k, self.stochastic.min_periods())?,
            d: latest("stochastic %D", &d, self.stochastic.d_min_periods())?,
        })
    }

    fn obv_snapshot(&self, series: &PriceSeries<f64>) -> Computed<ObvSnapshot> {
        let values: Series<f64> = self.obv.calculate(series)?;
        Ok(ObvSnapshot {
            value: latest("obv", &values, self.obv.min_periods())?,
        })
    }

    fn atr_snapshot(&self, series: &PriceSeries<f64>) -> Computed<AtrSnapshot> {
        let values = self.atr.calculate(series)?;
        Ok(AtrSnapshot {
            value: latest("atr", &values, self.atr.min_periods())?,
        })
    }

    fn fibonacci_snapshot(&self, series: &PriceSeries<f64>) -> Computed<FibonacciSnapshot> {
        let FibonacciLevels { high, low, levels } = self.fibonacci.calculate(series)?;
        for level in &levels {
            finite("fibonacci level", level.price)?;
        }
        Ok(FibonacciSnapshot {
            high: finite("fibonacci high", high)?,
            low: finite("fibonacci low", low)?,
            levels,
        })
    }
}

/// Run a default-configured [`Analyzer`] over `series`.
///
/// # Errors
///
/// See [`Analyzer::analyze`].
pub fn analyze(series: &PriceSeries<f64>) -> Result<IndicatorSnapshot> {
    Analyzer::new(AnalysisConfig::default())?.analyze(series)
}

fn log_unavailable(snapshot: &IndicatorSnapshot) {
    let fields: [(&str, &Reading<f64>); 17] = [
        ("rsi", &snapshot.rsi.value),
        ("macd", &snapshot.macd.macd),
        ("macd_signal", &snapshot.macd.signal),
        ("macd_histogram", &snapshot.macd.histogram),
        ("bollinger_upper", &snapshot.bollinger_bands.upper),
        ("bollinger_middle", &snapshot.bollinger_bands.middle),
        ("bollinger_lower", &snapshot.bollinger_bands.lower),
        ("stochastic_k", &snapshot.stochastic.k),
        ("stochastic_d", &snapshot.stochastic.d),
        ("obv", &snapshot.obv.value),
        ("atr", &snapshot.atr.value),
        ("current_price", &snapshot.summary.current_price),
        ("price_change_pct", &snapshot.summary.price_change_pct),
        ("average_volume", &snapshot.summary.average_volume),
        ("volatility_pct", &snapshot.summary.volatility_pct),
        ("short_ma", &snapshot.summary.short_ma),
        ("long_ma", &snapshot.summary.long_ma),
    ];

    for (field, reading) in fields {
        if let Some(reason) = reading.unavailable() {
            debug!(field, ?reason, "indicator unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Unavailable;
    use ta_core::error::SeriesError;
    use ta_indicators::prelude::{BollingerConfig, StochasticConfig};

    fn flat_bars(n: usize, price: f64) -> Vec<Bar<f64>> {
        (0..n).map(|i| Bar::flat(i as i64, price, 1000.0)).collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config =
            AnalysisConfig::default().with_bollinger_bands(BollingerConfig::new(20, -1.0));
        assert!(matches!(
            Analyzer::new(config),
            Err(crate::AnalysisError::Config(ConfigError::Invalid {
                family: "bollinger_bands",
                ..
            }))
        ));
    }

    #[test]
    fn test_rejects_empty_series() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        assert!(matches!(
            analyzer.analyze_bars(Vec::new()),
            Err(crate::AnalysisError::InvalidSeries(SeriesError::Empty))
        ));
    }

    #[test]
    fn test_single_bar() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let snapshot = analyzer.analyze_bars(flat_bars(1, 42.0)).unwrap();

        assert_eq!(snapshot.bars, 1);
        assert_eq!(snapshot.as_of, 0);
        assert_eq!(snapshot.rsi.value, Reading::insufficient(15, 1));
        assert_eq!(snapshot.macd.histogram, Reading::Available(0.0));
        assert_eq!(snapshot.obv.value, Reading::Available(1000.0));
        assert_eq!(snapshot.fibonacci.high, 42.0);
        assert_eq!(snapshot.fibonacci.low, 42.0);
    }

    #[test]
    fn test_stochastic_d_lags_k() {
        let config = AnalysisConfig::default().with_stochastic(StochasticConfig::new(5, 3));
        let analyzer = Analyzer::new(config).unwrap();
        let snapshot = analyzer.analyze_bars(flat_bars(6, 10.0)).unwrap();

        assert_eq!(snapshot.stochastic.k, Reading::Available(50.0));
        assert_eq!(
            snapshot.stochastic.d.unavailable(),
            Some(&Unavailable::InsufficientData {
                required: 7,
                available: 6
            })
        );
    }
}
