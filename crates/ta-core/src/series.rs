//! Time series data container.
//!
//! [`Series`] is the output type of every calculator: one value per input bar,
//! with NaN marking the warm-up positions where the calculator's window is not
//! yet full.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// A contiguous time series of floating-point values.
///
/// # Example
///
/// ```rust
/// use ta_core::Series;
///
/// let series: Series<f64> = Series::from_vec(vec![f64::NAN, 101.5, 99.8]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.latest(), Some(99.8));
/// assert_eq!(series.warmup_len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series filled with NaN values.
    #[must_use]
    pub fn nan(len: usize) -> Self {
        Self {
            data: vec![T::NAN; len],
        }
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Get a reference to the value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the last element, warm-up marker included.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns the final value if it is past the warm-up period.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.data.last().copied().filter(|v| !v.is_nan())
    }

    /// Number of leading warm-up (NaN) positions.
    #[must_use]
    pub fn warmup_len(&self) -> usize {
        self.data.iter().take_while(|v| v.is_nan()).count()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the series and return the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply a function element-wise, producing a new series.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Combine two equal-length series element-wise.
    ///
    /// # Panics
    ///
    /// Panics if the series have different lengths.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        assert_eq!(self.len(), other.len(), "Series length mismatch");
        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: TaFloat> AsRef<[T]> for Series<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
