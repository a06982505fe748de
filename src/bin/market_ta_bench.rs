//! Timing harness for the indicator calculators and the full analyzer.
//!
//! Usage:
//!     market_ta_bench <data_file> <iterations> [config_file]
//!
//! The data file is JSON of the form
//! `{"ohlcv": {"timestamp": [...], "open": [...], "high": [...], "low": [...], "close": [...], "volume": [...]}}`;
//! `timestamp` may be omitted, in which case bar indices are used.
//! Outputs a JSON array of benchmark results to stdout.

use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ta_analysis::{AnalysisConfig, Analyzer};
use ta_core::{Bar, Indicator, PriceSeries};
use ta_indicators::prelude::{
    Atr, BollingerBands, Fibonacci, Macd, Obv, ObvConfig, Rsi, Stochastic,
};

#[derive(Debug, Deserialize)]
struct OhlcvData {
    ohlcv: OhlcvRaw,
}

#[derive(Debug, Deserialize)]
struct OhlcvRaw {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

fn load_ohlcv(path: &str) -> Result<PriceSeries<f64>, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let OhlcvData { ohlcv } = serde_json::from_reader(reader)?;

    let len = ohlcv.close.len();
    for (name, column) in [
        ("open", ohlcv.open.len()),
        ("high", ohlcv.high.len()),
        ("low", ohlcv.low.len()),
        ("volume", ohlcv.volume.len()),
    ] {
        if column != len {
            return Err(format!("column {name} has {column} values, close has {len}").into());
        }
    }

    let timestamps = match ohlcv.timestamp {
        Some(ts) if ts.len() == len => ts,
        Some(ts) => {
            return Err(format!("column timestamp has {} values, close has {len}", ts.len()).into())
        }
        None => (0..len as i64).collect(),
    };

    let bars = (0..len)
        .map(|i| {
            Bar::new(
                timestamps[i],
                ohlcv.open[i],
                ohlcv.high[i],
                ohlcv.low[i],
                ohlcv.close[i],
                ohlcv.volume[i],
            )
        })
        .collect();

    Ok(PriceSeries::new(bars)?)
}

fn load_config(path: Option<&String>) -> Result<AnalysisConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(AnalysisConfig::from_json_str(&fs::read_to_string(path)?)?),
        None => Ok(AnalysisConfig::default()),
    }
}

fn benchmark<F>(name: &str, iterations: usize, candles: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    info!(name, "running");
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f();
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (candles as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name: name.to_string(),
        candles,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let data_file = &args[1];
    let iterations: usize = args[2].parse()?;
    if iterations == 0 {
        return Err("iterations must be at least 1".into());
    }
    let config = load_config(args.get(3))?;

    info!(data_file = %data_file, "loading data");
    let series = load_ohlcv(data_file)?;
    let candles = series.len();
    info!(candles, "loaded");

    let rsi = Rsi::<f64>::new(config.rsi.clone())?;
    let macd = Macd::<f64>::new(config.macd.clone())?;
    let bollinger = BollingerBands::<f64>::new(config.bollinger_bands.clone())?;
    let stochastic = Stochastic::<f64>::new(config.stochastic.clone())?;
    let obv = Obv::<f64>::new(ObvConfig::new())?;
    let atr = Atr::<f64>::new(config.atr.clone())?;
    let fibonacci = Fibonacci::<f64>::new(config.fibonacci.clone())?;
    let analyzer = Analyzer::new(config)?;

    let results = vec![
        benchmark("RSI", iterations, candles, || {
            let _ = rsi.calculate(&series);
        }),
        benchmark("MACD", iterations, candles, || {
            let _ = macd.calculate(&series);
        }),
        benchmark("Bollinger", iterations, candles, || {
            let _ = bollinger.calculate(&series);
        }),
        benchmark("Stochastic", iterations, candles, || {
            let _ = stochastic.calculate(&series);
        }),
        benchmark("OBV", iterations, candles, || {
            let _ = obv.calculate(&series);
        }),
        benchmark("ATR", iterations, candles, || {
            let _ = atr.calculate(&series);
        }),
        benchmark("Fibonacci", iterations, candles, || {
            let _ = fibonacci.calculate(&series);
        }),
        benchmark("Analyzer", iterations, candles, || {
            let _ = analyzer.analyze(&series);
        }),
    ];

    let snapshot = serde_json::to_string(&analyzer.analyze(&series)?)?;
    debug!(%snapshot, "final snapshot");

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} <data_file> <iterations> [config_file]",
            args.first().map_or("market_ta_bench", String::as_str)
        );
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
