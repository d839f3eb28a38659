//! Engine configuration.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::heading::Angle;
use crate::matcher::{FuzzyRoadNameMatcher, RoadNameMatcher};
use crate::standardize::RoadNameStandardizer;
use crate::{Distance, Percent};

const DEFAULT_HEADING_TOLERANCE: Angle = Angle::from_normalised(45.0);

/// Immutable tuning for a [`ReverseGeocoder`](crate::ReverseGeocoder).
///
/// Built once through [`MatchConfig::builder`] and read-only afterwards,
/// so a single configuration can back any number of concurrent queries.
///
/// # Examples
///
/// ```
/// use kerbside_core::{Distance, MatchConfig, Percent};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MatchConfig::builder(Distance::metres(25.0)?)
///     .road_name_closeness(Percent::new(70.0)?)
///     .build()?;
/// assert_eq!(config.heading_tolerance().as_degrees(), 45.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MatchConfig {
    within: Distance,
    road_name_closeness: Percent,
    heading_tolerance: Angle,
    compare_direction: bool,
    standardizer: Option<Arc<dyn RoadNameStandardizer>>,
    matcher: Arc<dyn RoadNameMatcher>,
}

/// Errors returned by [`MatchConfigBuilder::build`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchConfigError {
    /// The search radius was zero.
    #[error("search radius must be a positive distance")]
    NonPositiveRadius,
}

impl MatchConfig {
    /// Start building a configuration that searches within `within` of
    /// the requested location.
    #[must_use]
    pub fn builder(within: Distance) -> MatchConfigBuilder {
        MatchConfigBuilder {
            within,
            road_name_closeness: Percent::ZERO,
            heading_tolerance: DEFAULT_HEADING_TOLERANCE,
            compare_direction: true,
            standardizer: None,
            matcher: Arc::new(FuzzyRoadNameMatcher),
        }
    }

    /// Search radius around the requested location.
    #[must_use]
    pub const fn within(&self) -> Distance {
        self.within
    }

    /// Minimum acceptable road-name closeness. Candidates must score
    /// strictly above this threshold.
    #[must_use]
    pub const fn road_name_closeness(&self) -> Percent {
        self.road_name_closeness
    }

    /// Maximum angular difference between a requested heading and an
    /// edge's heading.
    #[must_use]
    pub const fn heading_tolerance(&self) -> Angle {
        self.heading_tolerance
    }

    /// Whether direction-aware comparison was requested.
    ///
    /// Recorded for compatibility with existing tooling; the matching
    /// algorithm does not consult it.
    #[must_use]
    pub const fn compare_direction(&self) -> bool {
        self.compare_direction
    }

    /// The configured road-name standardizer, if any.
    #[must_use]
    pub fn standardizer(&self) -> Option<&dyn RoadNameStandardizer> {
        self.standardizer.as_deref()
    }

    /// The configured road-name matcher.
    #[must_use]
    pub fn matcher(&self) -> &dyn RoadNameMatcher {
        &*self.matcher
    }
}

impl fmt::Debug for MatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchConfig")
            .field("within", &self.within)
            .field("road_name_closeness", &self.road_name_closeness)
            .field("heading_tolerance", &self.heading_tolerance)
            .field("compare_direction", &self.compare_direction)
            .field("standardizer", &self.standardizer.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`MatchConfig`].
///
/// Defaults: closeness threshold 0%, heading tolerance 45°, direction
/// comparison on, no standardizer, [`FuzzyRoadNameMatcher`] as the
/// matching strategy.
pub struct MatchConfigBuilder {
    within: Distance,
    road_name_closeness: Percent,
    heading_tolerance: Angle,
    compare_direction: bool,
    standardizer: Option<Arc<dyn RoadNameStandardizer>>,
    matcher: Arc<dyn RoadNameMatcher>,
}

impl MatchConfigBuilder {
    /// Require candidate names to score strictly above `threshold`.
    #[must_use]
    pub const fn road_name_closeness(mut self, threshold: Percent) -> Self {
        self.road_name_closeness = threshold;
        self
    }

    /// Accept edges whose heading differs from a requested heading by at
    /// most `tolerance`.
    #[must_use]
    pub const fn heading_tolerance(mut self, tolerance: Angle) -> Self {
        self.heading_tolerance = tolerance;
        self
    }

    /// Record whether direction-aware comparison was requested.
    #[must_use]
    pub const fn compare_direction(mut self, compare: bool) -> Self {
        self.compare_direction = compare;
        self
    }

    /// Normalise names through `standardizer` before scoring.
    #[must_use]
    pub fn standardizer(mut self, standardizer: Arc<dyn RoadNameStandardizer>) -> Self {
        self.standardizer = Some(standardizer);
        self
    }

    /// Replace the default matching strategy.
    #[must_use]
    pub fn matcher(mut self, matcher: Arc<dyn RoadNameMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<MatchConfig, MatchConfigError> {
        if self.within <= Distance::ZERO {
            return Err(MatchConfigError::NonPositiveRadius);
        }
        Ok(MatchConfig {
            within: self.within,
            road_name_closeness: self.road_name_closeness,
            heading_tolerance: self.heading_tolerance,
            compare_direction: self.compare_direction,
            standardizer: self.standardizer,
            matcher: self.matcher,
        })
    }
}
