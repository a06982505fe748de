//! Bounded-window primitives for rolling calculations.
//!
//! - [`RingBuffer`] keeps the last `capacity` values together with a running
//!   mean and sum of squared deviations, so mean, sample variance and standard
//!   deviation are all O(1) per update.
//! - [`MonotonicWindow`] tracks the rolling maximum or minimum in O(1)
//!   amortized time per update using a monotonic deque.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// A fixed-capacity circular buffer with O(1) rolling statistics.
///
/// The running mean and squared-deviation sum (`m2`) are maintained with
/// Welford's update when the buffer grows and with the paired
/// add-and-remove form once it is full. The buffer also counts how many of
/// the newest values are equal; whenever that run covers every buffered value
/// the statistics are reset to that value and zero, so a constant window has a
/// mean equal to its value and a variance of exactly zero no matter what came
/// before it.
///
/// # Example
///
/// ```rust
/// use ta_core::RingBuffer;
///
/// let mut buffer: RingBuffer<f64> = RingBuffer::new(3);
///
/// buffer.push(1.0);
/// buffer.push(2.0);
/// buffer.push(3.0);
/// assert_eq!(buffer.mean(), 2.0);
///
/// buffer.push(4.0); // Removes 1.0
/// assert_eq!(buffer.mean(), 3.0);
/// assert_eq!(buffer.variance(), 1.0);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct RingBuffer<T: TaFloat> {
    /// Internal storage.
    buffer: Vec<T>,
    /// Index of the next write position (also the oldest element when full).
    head: usize,
    /// Number of elements currently in the buffer.
    len: usize,
    /// Maximum capacity of the buffer.
    capacity: usize,
    /// Running mean of the buffered values.
    mean: T,
    /// Running sum of squared deviations from the mean.
    m2: T,
    /// Number of trailing values equal to the newest one.
    run: usize,
}

impl<T: TaFloat> RingBuffer<T> {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be > 0");
        Self {
            buffer: vec![T::ZERO; capacity],
            head: 0,
            len: 0,
            capacity,
            mean: T::ZERO,
            m2: T::ZERO,
            run: 0,
        }
    }

    /// Push a value into the buffer.
    ///
    /// If the buffer is full, the oldest value is replaced and returned.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.run = match self.newest() {
            Some(&newest) if newest == value => self.run + 1,
            _ => 1,
        };

        let evicted = if self.is_full() {
            let old = self.buffer[self.head];
            let old_mean = self.mean;
            self.mean = old_mean + (value - old) / <T as TaFloat>::from_usize(self.len);
            self.m2 = self.m2 + (value - old) * (value - self.mean + old - old_mean);
            Some(old)
        } else {
            self.len += 1;
            let delta = value - self.mean;
            self.mean = self.mean + delta / <T as TaFloat>::from_usize(self.len);
            self.m2 = self.m2 + delta * (value - self.mean);
            None
        };

        // Rounding in the remove step can leave a tiny negative residue.
        if self.m2 < T::ZERO {
            self.m2 = T::ZERO;
        }

        self.buffer[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.run >= self.len {
            self.mean = value;
            self.m2 = T::ZERO;
        } else if self.head == 0 {
            self.resync();
        }
        evicted
    }

    /// Recompute mean and `m2` from the stored values.
    ///
    /// Runs once per full cycle of the buffer, so updates stay O(1) amortized
    /// while rounding drift from the add-and-remove step cannot accumulate
    /// past one window.
    fn resync(&mut self) {
        let mut mean = T::ZERO;
        for (k, &x) in self.iter().enumerate() {
            mean = mean + (x - mean) / <T as TaFloat>::from_usize(k + 1);
        }
        let m2 = self
            .iter()
            .fold(T::ZERO, |acc, &x| acc + (x - mean) * (x - mean));

        self.mean = mean;
        self.m2 = m2;
    }

    /// Returns `true` if the buffer is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get a value by index (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.is_full() {
            (self.head + index) % self.capacity
        } else {
            index
        };

        Some(&self.buffer[actual_index])
    }

    /// Get the newest value in the buffer.
    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let index = if self.head == 0 {
            self.capacity - 1
        } else {
            self.head - 1
        };

        Some(&self.buffer[index])
    }

    /// Mean of the buffered values, NaN when empty.
    #[must_use]
    pub fn mean(&self) -> T {
        if self.is_empty() {
            return T::NAN;
        }
        self.mean
    }

    /// Sample variance (divisor `len - 1`), NaN with fewer than two values.
    #[must_use]
    pub fn variance(&self) -> T {
        if self.len < 2 {
            return T::NAN;
        }
        self.m2 / <T as TaFloat>::from_usize(self.len - 1)
    }

    /// Sample standard deviation, NaN with fewer than two values.
    #[must_use]
    pub fn std(&self) -> T {
        self.variance().sqrt()
    }

    /// Clear all values from the buffer.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
        self.mean = T::ZERO;
        self.m2 = T::ZERO;
        self.run = 0;
    }

    /// Returns an iterator over the values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

/// Which extreme a [`MonotonicWindow`] tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extreme {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// Rolling maximum or minimum over the last `window` values.
///
/// Keeps a deque of `(position, value)` candidates ordered so the front is
/// always the current extreme. Each value enters and leaves the deque once,
/// giving O(1) amortized updates.
///
/// # Example
///
/// ```rust
/// use ta_core::window::{Extreme, MonotonicWindow};
///
/// let mut highest = MonotonicWindow::new(3, Extreme::Max);
/// for v in [3.0, 1.0, 4.0, 1.0, 0.5] {
///     highest.push(v);
/// }
/// assert_eq!(highest.current(), Some(4.0));
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicWindow<T: TaFloat> {
    window: usize,
    extreme: Extreme,
    candidates: VecDeque<(usize, T)>,
    position: usize,
}

impl<T: TaFloat> MonotonicWindow<T> {
    /// Create an empty window.
    ///
    /// # Panics
    ///
    /// Panics if window is 0.
    #[must_use]
    pub fn new(window: usize, extreme: Extreme) -> Self {
        assert!(window > 0, "MonotonicWindow size must be > 0");
        Self {
            window,
            extreme,
            candidates: VecDeque::with_capacity(window),
            position: 0,
        }
    }

    /// Push the next value, expiring anything older than the window.
    pub fn push(&mut self, value: T) {
        let dominated = |existing: T| match self.extreme {
            Extreme::Max => existing <= value,
            Extreme::Min => existing >= value,
        };
        while self.candidates.back().is_some_and(|&(_, v)| dominated(v)) {
            self.candidates.pop_back();
        }
        self.candidates.push_back((self.position, value));

        while self
            .candidates
            .front()
            .is_some_and(|&(pos, _)| pos + self.window <= self.position)
        {
            self.candidates.pop_front();
        }
        self.position += 1;
    }

    /// Returns `true` once `window` values have been pushed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.position >= self.window
    }

    /// Current extreme of the values in the window, `None` when empty.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.candidates.front().map(|&(_, v)| v)
    }
}
