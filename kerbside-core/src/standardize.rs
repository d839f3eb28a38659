//! Locale-aware road-name normalisation seam.

use crate::RoadName;

/// Rewrite a road name into its canonical abbreviation form.
///
/// Standardizers hold the locale-specific rules (e.g. `"Street"` to
/// `"St"`) that make two spellings of the same road comparable. The
/// engine applies a configured standardizer to both the requested name
/// and every candidate name before scoring; it ships no rules of its
/// own. Implementations must be thread-safe (`Send` + `Sync`).
///
/// # Examples
///
/// ```
/// use kerbside_core::{RoadName, RoadNameStandardizer};
///
/// struct StreetAbbreviator;
///
/// impl RoadNameStandardizer for StreetAbbreviator {
///     fn standardize(&self, name: &RoadName) -> RoadName {
///         RoadName::new(name.as_str().replace("Street", "St"))
///             .unwrap_or_else(|_| name.clone())
///     }
/// }
///
/// # fn main() -> Result<(), kerbside_core::RoadNameError> {
/// let standardizer = StreetAbbreviator;
/// let canonical = standardizer.standardize(&RoadName::new("Main Street")?);
/// assert_eq!(canonical.as_str(), "Main St");
/// # Ok(())
/// # }
/// ```
pub trait RoadNameStandardizer: Send + Sync {
    /// Return the canonical form of `name`.
    fn standardize(&self, name: &RoadName) -> RoadName;
}
