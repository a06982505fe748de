//! Present-or-unavailable snapshot values.

use ta_core::{error::IndicatorError, series::Series};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a snapshot value could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum Unavailable {
    /// The series is shorter than the calculator's window.
    InsufficientData {
        /// Bars the calculator needs.
        required: usize,
        /// Bars the series has.
        available: usize,
    },
    /// A percentage would divide by a zero reference price.
    ZeroReference,
}

/// A single snapshot value: either computed, or explicitly unavailable.
///
/// Consumers cannot mistake a missing value for zero: there is no NaN
/// inside an `Available` reading.
///
/// ```
/// use ta_analysis::{Reading, Unavailable};
///
/// let rsi = Reading::Available(61.5);
/// assert_eq!(rsi.value(), Some(&61.5));
///
/// let atr: Reading<f64> = Reading::insufficient(14, 5);
/// assert!(!atr.is_available());
/// assert_eq!(
///     atr.unavailable(),
///     Some(&Unavailable::InsufficientData { required: 14, available: 5 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reading<V> {
    /// The computed value.
    Available(V),
    /// No value, with the reason.
    Unavailable(Unavailable),
}

impl<V> Reading<V> {
    /// Shorthand for `Unavailable(InsufficientData { .. })`.
    #[must_use]
    pub fn insufficient(required: usize, available: usize) -> Self {
        Self::Unavailable(Unavailable::InsufficientData {
            required,
            available,
        })
    }

    /// The value, if available.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    /// The reason, if unavailable.
    #[must_use]
    pub fn unavailable(&self) -> Option<&Unavailable> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }

    /// Whether a value is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Convert into an `Option`, dropping the reason.
    #[must_use]
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    /// Transform the value, keeping the reason.
    pub fn map<U, F>(self, f: F) -> Reading<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Available(v) => Reading::Available(f(v)),
            Self::Unavailable(reason) => Reading::Unavailable(reason),
        }
    }
}

/// Read the final value of a calculator's output.
///
/// Unavailable while the series is shorter than `required`; a non-finite
/// final value after warm-up is a numeric failure.
pub(crate) fn latest(
    name: &'static str,
    output: &Series<f64>,
    required: usize,
) -> Result<Reading<f64>, IndicatorError> {
    let available = output.len();
    match output.last() {
        Some(_) if available < required => Ok(Reading::insufficient(required, available)),
        Some(&v) => finite(name, v).map(Reading::Available),
        None => Ok(Reading::insufficient(required, 0)),
    }
}

/// Reject infinities and NaN.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, IndicatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::NumericError(format!(
            "{name} produced non-finite value {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_respects_required() {
        let output = Series::from_vec(vec![f64::NAN, f64::NAN, 3.0]);

        assert_eq!(latest("sma", &output, 3), Ok(Reading::Available(3.0)));
        assert_eq!(latest("sma", &output, 4), Ok(Reading::insufficient(4, 3)));
        assert_eq!(
            latest("sma", &Series::new(), 1),
            Ok(Reading::insufficient(1, 0))
        );
    }

    #[test]
    fn test_latest_rejects_overflow() {
        let output = Series::from_vec(vec![1.0, f64::INFINITY]);
        assert!(matches!(
            latest("obv", &output, 1),
            Err(IndicatorError::NumericError(_))
        ));
    }

    #[test]
    fn test_map_keeps_reason() {
        let reading: Reading<f64> = Reading::Unavailable(Unavailable::ZeroReference);
        assert_eq!(
            reading.map(|v| v * 2.0),
            Reading::Unavailable(Unavailable::ZeroReference)
        );
        assert_eq!(Reading::Available(2.0).map(|v| v * 2.0).into_option(), Some(4.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_reading_json_shape() {
        let json = serde_json::to_string(&Reading::Available(1.5)).unwrap();
        assert_eq!(json, r#"{"available":1.5}"#);

        let json = serde_json::to_string(&Reading::<f64>::insufficient(20, 5)).unwrap();
        assert_eq!(
            json,
            r#"{"unavailable":{"reason":"insufficient_data","required":20,"available":5}}"#
        );

        let json =
            serde_json::to_string(&Reading::<f64>::Unavailable(Unavailable::ZeroReference))
                .unwrap();
        assert_eq!(json, r#"{"unavailable":{"reason":"zero_reference"}}"#);
    }
}
