//! Compass bearings and cardinal directions.
//!
//! Bearings follow the compass convention: 0° is north, 90° is east,
//! increasing clockwise.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A compass bearing in degrees, normalised to `[0, 360)`.
///
/// # Examples
///
/// ```
/// use kerbside_core::{Angle, CompassDirection};
///
/// # fn main() -> Result<(), kerbside_core::AngleError> {
/// let north = Angle::degrees(0.0)?;
/// let just_west_of_north = Angle::degrees(350.0)?;
/// assert_eq!(north.difference(just_west_of_north).as_degrees(), 10.0);
/// assert_eq!(just_west_of_north.compass(), CompassDirection::North);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

/// Errors returned by [`Angle::degrees`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AngleError {
    /// The value was NaN or infinite.
    #[error("bearing must be finite")]
    NotFinite,
}

impl Angle {
    /// Validates and constructs an [`Angle`], wrapping into `[0, 360)`.
    pub fn degrees(value: f64) -> Result<Self, AngleError> {
        if !value.is_finite() {
            return Err(AngleError::NotFinite);
        }
        Ok(Self(value.rem_euclid(360.0)))
    }

    /// Construct from a value already known to lie in `[0, 360)`.
    pub(crate) const fn from_normalised(value: f64) -> Self {
        Self(value)
    }

    /// The bearing as plain degrees in `[0, 360)`.
    #[must_use]
    pub const fn as_degrees(self) -> f64 {
        self.0
    }

    /// Minimum unsigned angular difference to `other`, wrapped at 360°.
    ///
    /// The result lies in `[0°, 180°]`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        let gap = (self.0 - other.0).abs();
        Self(gap.min(360.0 - gap))
    }

    /// Bucket the bearing into the nearest of the eight compass directions.
    ///
    /// Each direction owns a 45° sector centred on its exact bearing, so
    /// 337.5° up to 22.5° reads as north.
    #[must_use]
    pub fn compass(self) -> CompassDirection {
        let sector = ((self.0 + 22.5).rem_euclid(360.0) / 45.0) as usize % 8;
        CompassDirection::ALL[sector]
    }
}

/// One of the eight cardinal or ordinal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    /// 0°.
    North,
    /// 45°.
    Northeast,
    /// 90°.
    East,
    /// 135°.
    Southeast,
    /// 180°.
    South,
    /// 225°.
    Southwest,
    /// 270°.
    West,
    /// 315°.
    Northwest,
}

impl CompassDirection {
    pub(crate) const ALL: [Self; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];

    /// The short token embedded in road names, e.g. `"N"` or `"SW"`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::West => "W",
            Self::Northwest => "NW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing a [`CompassDirection`] token fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a compass direction token")]
pub struct ParseCompassDirectionError;

impl FromStr for CompassDirection {
    type Err = ParseCompassDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "NE" => Ok(Self::Northeast),
            "E" => Ok(Self::East),
            "SE" => Ok(Self::Southeast),
            "S" => Ok(Self::South),
            "SW" => Ok(Self::Southwest),
            "W" => Ok(Self::West),
            "NW" => Ok(Self::Northwest),
            _ => Err(ParseCompassDirectionError),
        }
    }
}
