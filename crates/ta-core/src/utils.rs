//! Utility functions for common technical analysis calculations.
//!
//! These functions provide building blocks used by indicators: moving
//! averages, rolling statistics and bar-to-bar transforms. Every function
//! returns a [`Series`] of the same length as its input, with NaN at the
//! warm-up positions.
//!
//! The rolling functions accept input that itself starts with a NaN warm-up
//! prefix (for example `%K` feeding `%D`): the window only starts filling at the
//! first defined value.

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;
use crate::window::{Extreme, MonotonicWindow, RingBuffer};

/// Number of leading NaN values in `data`.
fn leading_nan<T: TaFloat>(data: &[T]) -> usize {
    data.iter().take_while(|v| v.is_nan()).count()
}

/// Drive a [`RingBuffer`] over `data`, emitting `emit(&buffer)` once it is full.
fn rolling_buffer<T, F>(data: &[T], window: usize, emit: F) -> Series<T>
where
    T: TaFloat,
    F: Fn(&RingBuffer<T>) -> T,
{
    if data.is_empty() || window == 0 {
        return Series::new();
    }

    let offset = leading_nan(data);
    let mut result = Series::with_capacity(data.len());
    for _ in 0..offset {
        result.push(T::NAN);
    }

    let mut buffer = RingBuffer::new(window);
    for &x in &data[offset..] {
        buffer.push(x);
        result.push(if buffer.is_full() { emit(&buffer) } else { T::NAN });
    }

    result
}

/// Compute Simple Moving Average (SMA).
///
/// For each point, computes the mean of the previous `window` values.
/// The first `window - 1` values are NaN.
///
/// # Arguments
///
/// * `data` - Input data slice
/// * `window` - Number of periods for the moving average
///
/// # Example
///
/// ```rust
/// use ta_core::utils::sma;
///
/// let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = sma(&data, 3);
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // (1+2+3)/3
/// assert_eq!(result[3], 3.0); // (2+3+4)/3
/// assert_eq!(result[4], 4.0); // (3+4+5)/3
/// ```
#[must_use]
pub fn sma<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_buffer(data, window, RingBuffer::mean)
}

/// Compute rolling sample standard deviation (divisor `window - 1`).
///
/// A window of 1 has no sample deviation and yields NaN throughout.
#[must_use]
pub fn rolling_std<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_buffer(data, window, RingBuffer::std)
}

/// Compute the rolling mean and sample standard deviation in one pass.
///
/// Both series come from the same buffer. Constant input yields a mean equal
/// to the constant and a deviation of exactly zero.
#[must_use]
pub fn rolling_mean_std<T: TaFloat>(data: &[T], window: usize) -> (Series<T>, Series<T>) {
    if data.is_empty() || window == 0 {
        return (Series::new(), Series::new());
    }

    let offset = leading_nan(data);
    let mut means = Series::with_capacity(data.len());
    let mut stds = Series::with_capacity(data.len());
    for _ in 0..offset {
        means.push(T::NAN);
        stds.push(T::NAN);
    }

    let mut buffer = RingBuffer::new(window);
    for &x in &data[offset..] {
        buffer.push(x);
        if buffer.is_full() {
            means.push(buffer.mean());
            stds.push(buffer.std());
        } else {
            means.push(T::NAN);
            stds.push(T::NAN);
        }
    }

    (means, stds)
}

/// Compute Exponential Moving Average (EMA).
///
/// Smoothing factor `α = 2 / (span + 1)`. The recurrence is seeded with the
/// first value, so the output is defined from the first bar:
/// `EMA(0) = x(0)`, `EMA(t) = EMA(t-1) + α * (x(t) - EMA(t-1))`.
///
/// # Arguments
///
/// * `data` - Input data slice
/// * `span` - Span of the EMA
///
/// # Example
///
/// ```rust
/// use ta_core::utils::ema;
///
/// let data: [f64; 3] = [1.0, 2.0, 3.0];
/// let result = ema(&data, 3);
/// // alpha = 0.5
/// assert_eq!(result.as_slice(), &[1.0, 1.5, 2.25]);
/// ```
#[must_use]
pub fn ema<T: TaFloat>(data: &[T], span: usize) -> Series<T> {
    if data.is_empty() || span == 0 {
        return Series::new();
    }

    let alpha = T::TWO / <T as TaFloat>::from_usize(span + 1);
    data.iter()
        .scan(None, |state: &mut Option<T>, &x| {
            let next = match *state {
                None => x,
                Some(prev) => prev + alpha * (x - prev),
            };
            *state = Some(next);
            Some(next)
        })
        .collect()
}

/// Compute True Range for OHLCV data.
///
/// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
/// First bar uses High - Low since there's no previous close.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if `low` or `close` is not
/// the same length as `high`.
pub fn true_range<T: TaFloat>(high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
    let len = high.len();
    if let Some(actual) = [low.len(), close.len()].into_iter().find(|&l| l != len) {
        return Err(IndicatorError::LengthMismatch {
            expected: len,
            actual,
        });
    }
    if len == 0 {
        return Ok(Series::new());
    }

    let mut result = Series::with_capacity(len);

    // First bar: just high - low
    result.push(high[0] - low[0]);

    for i in 1..len {
        let prev_close = close[i - 1];
        let hl = high[i] - low[i];
        let hc = (high[i] - prev_close).abs();
        let lc = (low[i] - prev_close).abs();

        result.push(hl.max(hc).max(lc));
    }

    Ok(result)
}

fn rolling_extreme<T: TaFloat>(data: &[T], window: usize, extreme: Extreme) -> Series<T> {
    if data.is_empty() || window == 0 {
        return Series::new();
    }

    let mut tracker = MonotonicWindow::new(window, extreme);
    data.iter()
        .map(|&x| {
            tracker.push(x);
            match tracker.current() {
                Some(v) if tracker.is_full() => v,
                _ => T::NAN,
            }
        })
        .collect()
}

/// Compute rolling maximum over a window.
#[must_use]
pub fn rolling_max<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_extreme(data, window, Extreme::Max)
}

/// Compute rolling minimum over a window.
#[must_use]
pub fn rolling_min<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_extreme(data, window, Extreme::Min)
}

/// Compute first differences: `y[i] = x[i] - x[i-periods]`.
#[must_use]
pub fn diff<T: TaFloat>(data: &[T], periods: usize) -> Series<T> {
    if data.is_empty() || periods == 0 {
        return Series::from_vec(data.to_vec());
    }

    (0..data.len())
        .map(|i| {
            if i < periods {
                T::NAN
            } else {
                data[i] - data[i - periods]
            }
        })
        .collect()
}

/// Compute percentage change: `(x[i] - x[i-periods]) / x[i-periods]`.
///
/// A zero reference value yields NaN rather than an infinity.
#[must_use]
pub fn pct_change<T: TaFloat>(data: &[T], periods: usize) -> Series<T> {
    if data.is_empty() || periods == 0 {
        return Series::nan(data.len());
    }

    (0..data.len())
        .map(|i| {
            if i < periods {
                return T::NAN;
            }
            let prev = data[i - periods];
            if prev == T::ZERO {
                T::NAN
            } else {
                (data[i] - prev) / prev
            }
        })
        .collect()
}
