//! Physical distances in metres.

use thiserror::Error;

/// A non-negative distance in metres.
///
/// # Examples
///
/// ```
/// use kerbside_core::Distance;
///
/// # fn main() -> Result<(), kerbside_core::DistanceError> {
/// let radius = Distance::metres(25.0)?;
/// assert!(radius < Distance::MAX);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(f64);

/// Errors returned by [`Distance::metres`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    /// The value was NaN or infinite.
    #[error("distance must be finite")]
    NotFinite,
    /// The value was below zero.
    #[error("distance must not be negative")]
    Negative,
}

impl Distance {
    /// Zero metres.
    pub const ZERO: Self = Self(0.0);
    /// The largest representable distance, usable as a fold seed.
    pub const MAX: Self = Self(f64::MAX);

    /// Validates and constructs a [`Distance`] from metres.
    pub fn metres(value: f64) -> Result<Self, DistanceError> {
        if !value.is_finite() {
            return Err(DistanceError::NotFinite);
        }
        if value < 0.0 {
            return Err(DistanceError::Negative);
        }
        Ok(Self(value))
    }

    /// The distance as a plain number of metres.
    #[must_use]
    pub const fn as_metres(self) -> f64 {
        self.0
    }
}
