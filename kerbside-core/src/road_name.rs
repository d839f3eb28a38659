//! Road-name values and their embedded direction tokens.

use std::fmt;

use thiserror::Error;

use crate::heading::CompassDirection;

/// The printable name of a road, e.g. `"N 5th St"`.
///
/// Names compare case-insensitively through [`RoadName::eq_ignore_case`]
/// and may embed a leading or trailing direction token that disambiguates
/// the carriageways of a directionally split road.
///
/// # Examples
///
/// ```
/// use kerbside_core::{CompassDirection, RoadName};
///
/// # fn main() -> Result<(), kerbside_core::RoadNameError> {
/// let name = RoadName::new("Main St NE")?;
/// assert_eq!(name.direction(), Some(CompassDirection::Northeast));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadName(String);

/// Errors returned by [`RoadName::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoadNameError {
    /// The name was empty or all whitespace.
    #[error("road name must not be blank")]
    Blank,
}

impl RoadName {
    /// Validates and constructs a [`RoadName`].
    pub fn new(name: impl Into<String>) -> Result<Self, RoadNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoadNameError::Blank);
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive value equality.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Extract an embedded direction token.
    ///
    /// A trailing token wins over a leading one, so `"N Main St S"` reads
    /// as south.
    #[must_use]
    pub fn direction(&self) -> Option<CompassDirection> {
        let mut words = self.0.split_whitespace();
        let first = words.next()?;
        if let Some(last) = words.next_back() {
            if let Ok(direction) = last.parse() {
                return Some(direction);
            }
        }
        first.parse().ok()
    }

    /// Append a direction token to the name.
    ///
    /// Used to complete undirected names on directionally split roads,
    /// e.g. `"Main St"` plus east gives `"Main St E"`.
    #[must_use]
    pub fn with_direction(&self, direction: CompassDirection) -> Self {
        Self(format!("{} {}", self.0, direction.token()))
    }
}

impl fmt::Display for RoadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
