//! End-to-end tests for snapshot assembly.

use approx::assert_relative_eq;
use ta_analysis::prelude::*;
use ta_indicators::prelude::{BollingerConfig, FibonacciConfig, RsiConfig};

fn bars_from_closes(closes: &[f64], volume: f64) -> Vec<Bar<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::flat(1_700_000_000_000 + i as i64 * 86_400_000, close, volume))
        .collect()
}

/// Deterministic wavy OHLCV data with real ranges.
fn synthetic_bars(n: usize) -> Vec<Bar<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + (t * 0.37).sin() * 6.0 + t * 0.05;
            let open = close - (t * 0.91).cos();
            let high = open.max(close) + 0.5 + (t * 0.13).sin().abs();
            let low = open.min(close) - 0.5 - (t * 0.29).cos().abs();
            let volume = 10_000.0 + (t * 1.7).sin().abs() * 5_000.0;
            Bar::new(i as i64, open, high, low, close, volume)
        })
        .collect()
}

fn default_analyzer() -> Analyzer {
    Analyzer::new(AnalysisConfig::default()).unwrap()
}

#[test]
fn test_constant_close_scenario() {
    let snapshot = default_analyzer()
        .analyze_bars(bars_from_closes(&[100.0; 30], 500.0))
        .unwrap();

    assert_eq!(snapshot.bars, 30);
    assert_eq!(snapshot.rsi.value, Reading::Available(50.0));
    assert_eq!(snapshot.bollinger_bands.upper, Reading::Available(100.0));
    assert_eq!(snapshot.bollinger_bands.middle, Reading::Available(100.0));
    assert_eq!(snapshot.bollinger_bands.lower, Reading::Available(100.0));
    assert_eq!(snapshot.stochastic.k, Reading::Available(50.0));
    assert_eq!(snapshot.stochastic.d, Reading::Available(50.0));
    assert_eq!(snapshot.macd.histogram, Reading::Available(0.0));
    assert_eq!(snapshot.atr.value, Reading::Available(0.0));
    assert_eq!(snapshot.obv.value, Reading::Available(500.0));
}

#[test]
fn test_rising_close_scenario() {
    let closes: Vec<f64> = (1..=30).map(f64::from).collect();
    let snapshot = default_analyzer()
        .analyze_bars(bars_from_closes(&closes, 1000.0))
        .unwrap();

    assert!(*snapshot.macd.histogram.value().unwrap() > 0.0);
    assert_eq!(snapshot.obv.value, Reading::Available(30_000.0));
    assert_eq!(snapshot.rsi.value, Reading::Available(100.0));
    assert_eq!(snapshot.fibonacci.low, 11.0);
    assert_eq!(snapshot.fibonacci.high, 30.0);
}

#[test]
fn test_short_series_partial_snapshot() {
    let snapshot = default_analyzer()
        .analyze_bars(bars_from_closes(&[10.0, 11.0, 10.5, 12.0, 11.5], 100.0))
        .unwrap();

    let missing = Reading::insufficient(20, 5);
    assert_eq!(snapshot.bollinger_bands.upper, missing);
    assert_eq!(snapshot.bollinger_bands.middle, missing);
    assert_eq!(snapshot.bollinger_bands.lower, missing);
    assert_eq!(snapshot.rsi.value, Reading::insufficient(15, 5));
    assert_eq!(snapshot.atr.value, Reading::insufficient(14, 5));
    assert_eq!(snapshot.stochastic.k, Reading::insufficient(14, 5));

    // 10 -> 11 up, -> 10.5 down, -> 12 up, -> 11.5 down
    assert_eq!(snapshot.obv.value, Reading::Available(100.0));
    assert!(snapshot.macd.macd.is_available());
    assert_eq!(snapshot.fibonacci.low, 10.0);
    assert_eq!(snapshot.fibonacci.high, 12.0);
    assert_eq!(snapshot.fibonacci.levels.len(), 7);
}

#[test]
fn test_invalid_series_rejected() {
    let analyzer = default_analyzer();

    let mut bars = bars_from_closes(&[10.0, 11.0, 12.0], 100.0);
    bars[1].high = 9.0;
    assert!(matches!(
        analyzer.analyze_bars(bars),
        Err(AnalysisError::InvalidSeries(SeriesError::HighBelowLow { index: 1, .. }))
    ));

    let mut bars = bars_from_closes(&[10.0, 11.0, 12.0], 100.0);
    bars[2].timestamp = bars[1].timestamp;
    assert!(matches!(
        analyzer.analyze_bars(bars),
        Err(AnalysisError::InvalidSeries(
            SeriesError::NonMonotonicTimestamp { index: 2, .. }
        ))
    ));

    let mut bars = bars_from_closes(&[10.0, 11.0, 12.0], 100.0);
    bars[0].volume = -1.0;
    assert!(matches!(
        analyzer.analyze_bars(bars),
        Err(AnalysisError::InvalidSeries(SeriesError::NegativeVolume { index: 0, .. }))
    ));

    let mut bars = bars_from_closes(&[10.0, 11.0, 12.0], 100.0);
    bars[2].close = f64::NAN;
    assert!(matches!(
        analyzer.analyze_bars(bars),
        Err(AnalysisError::InvalidSeries(SeriesError::NonFinite { index: 2, .. }))
    ));
}

#[test]
fn test_snapshot_is_deterministic() {
    let analyzer = default_analyzer();
    let series = PriceSeries::new(synthetic_bars(120)).unwrap();

    let first = analyzer.analyze(&series).unwrap();
    let second = analyzer.analyze(&series).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_vec(&first).unwrap();
    let second_json = serde_json::to_vec(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_full_snapshot_invariants() {
    let snapshot = ta_analysis::analyze(&PriceSeries::new(synthetic_bars(250)).unwrap()).unwrap();

    let rsi = *snapshot.rsi.value.value().unwrap();
    assert!((0.0..=100.0).contains(&rsi));

    let upper = *snapshot.bollinger_bands.upper.value().unwrap();
    let middle = *snapshot.bollinger_bands.middle.value().unwrap();
    let lower = *snapshot.bollinger_bands.lower.value().unwrap();
    assert!(upper >= middle && middle >= lower);

    let macd = *snapshot.macd.macd.value().unwrap();
    let signal = *snapshot.macd.signal.value().unwrap();
    assert_relative_eq!(
        *snapshot.macd.histogram.value().unwrap(),
        macd - signal,
        epsilon = 1e-12
    );

    let k = *snapshot.stochastic.k.value().unwrap();
    assert!((0.0..=100.0).contains(&k));
    assert!(*snapshot.atr.value.value().unwrap() > 0.0);

    assert!(snapshot.summary.short_ma.is_available());
    assert!(snapshot.summary.long_ma.is_available());
    assert!(snapshot.summary.volatility_pct.is_available());

    let fib = &snapshot.fibonacci;
    assert_eq!(fib.level(0.0), Some(fib.low));
    assert_eq!(fib.level(1.0), Some(fib.high));
    for pair in fib.levels.windows(2) {
        assert!(pair[1].price >= pair[0].price);
    }
}

#[test]
fn test_fibonacci_map_ordering() {
    let snapshot = default_analyzer()
        .analyze_bars(synthetic_bars(40))
        .unwrap();
    let map = snapshot.fibonacci.as_map();

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["0.0", "0.236", "0.382", "0.5", "0.618", "0.786", "1.0"]
    );
    assert_eq!(map["0.0"], snapshot.fibonacci.low);
    assert_eq!(map["1.0"], snapshot.fibonacci.high);
}

#[test]
fn test_custom_config() {
    let config = AnalysisConfig::default()
        .with_rsi(RsiConfig::new(4))
        .with_bollinger_bands(BollingerConfig::new(5, 1.0))
        .with_fibonacci(FibonacciConfig::default().with_ratios(vec![0.5]))
        .with_summary(SummaryConfig::new(2, 3));
    let analyzer = Analyzer::new(config.clone()).unwrap();
    assert_eq!(analyzer.config(), &config);

    let snapshot = analyzer
        .analyze_bars(bars_from_closes(&[10.0, 11.0, 10.5, 12.0, 11.5], 100.0))
        .unwrap();

    assert!(snapshot.rsi.value.is_available());
    assert_relative_eq!(
        *snapshot.bollinger_bands.middle.value().unwrap(),
        11.0,
        epsilon = 1e-12
    );
    assert_eq!(snapshot.fibonacci.levels.len(), 1);
    assert_eq!(snapshot.fibonacci.level(0.5), Some(11.0));
    assert_relative_eq!(*snapshot.summary.short_ma.value().unwrap(), 11.75, epsilon = 1e-12);
    assert_relative_eq!(
        *snapshot.summary.long_ma.value().unwrap(),
        34.0 / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_json_config() {
    let config = AnalysisConfig::from_json_str(
        r#"{"stochastic": {"k_period": 5}, "summary": {"long_ma": 100}}"#,
    )
    .unwrap();
    assert_eq!(config.stochastic.k_period, 5);
    assert_eq!(config.stochastic.d_period, 3);
    assert_eq!(config.summary.short_ma, 50);
    assert_eq!(config.summary.long_ma, 100);

    let err = AnalysisConfig::from_json_str(r#"{"macd": {"fast": 30}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { family: "macd", .. }));

    let err = AnalysisConfig::from_json_str(r#"{"rsi": {"period": "fourteen"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = default_analyzer()
        .analyze_bars(bars_from_closes(&[10.0, 11.0, 10.5], 100.0))
        .unwrap();

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["bars"], 3);
    assert_eq!(
        value["bollinger_bands"]["upper"]["unavailable"]["reason"],
        "insufficient_data"
    );
    assert_eq!(value["bollinger_bands"]["upper"]["unavailable"]["required"], 20);
    assert_eq!(value["obv"]["value"]["available"], 100.0);
    assert_eq!(value["fibonacci"]["levels"][0]["ratio"], 0.0);
    assert_eq!(value["fibonacci"]["levels"][0]["price"], 10.0);
    assert_eq!(value["summary"]["current_price"]["available"], 10.5);
}

#[test]
fn test_analysis_with_debug_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ta_analysis=debug")
        .with_test_writer()
        .try_init();

    let analyzer = default_analyzer();
    let snapshot = analyzer
        .analyze_bars(bars_from_closes(&[10.0, 10.5], 100.0))
        .unwrap();
    assert_eq!(snapshot.summary.volatility_pct, Reading::insufficient(3, 2));

    let mut bars = bars_from_closes(&[10.0, 10.5], 100.0);
    bars[1].low = 11.0;
    assert!(analyzer.analyze_bars(bars).is_err());
}
