//! Road-name closeness scores.

use thiserror::Error;

/// A closeness score held within the inclusive range `[0, 100]`.
///
/// Scores quantify how well a candidate road name matches a desired one.
/// A score of 100 means the names are considered identical; 0 means no
/// resemblance worth reporting.
///
/// # Examples
///
/// ```
/// use kerbside_core::Percent;
///
/// # fn main() -> Result<(), kerbside_core::PercentError> {
/// let threshold = Percent::new(80.0)?;
/// assert!(Percent::HUNDRED > threshold);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percent(f64);

/// Errors returned by [`Percent::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PercentError {
    /// The value was NaN or infinite.
    #[error("percentage must be finite")]
    NotFinite,
    /// The value fell outside `0..=100`.
    #[error("percentage must lie within 0..=100")]
    OutOfRange,
}

impl Percent {
    /// No resemblance at all.
    pub const ZERO: Self = Self(0.0);
    /// A perfect match.
    pub const HUNDRED: Self = Self(100.0);

    /// Validates and constructs a [`Percent`].
    pub fn new(value: f64) -> Result<Self, PercentError> {
        if !value.is_finite() {
            return Err(PercentError::NotFinite);
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(PercentError::OutOfRange);
        }
        Ok(Self(value))
    }

    /// Clamp an arbitrary score into range.
    ///
    /// Non-finite input becomes [`Percent::ZERO`].
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// The score as a plain number in `0..=100`.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}
