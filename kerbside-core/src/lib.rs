//! Core matching engine for the kerbside reverse geocoder.
//!
//! Given a point location, an optional heading, and an optional road-name
//! hint, [`ReverseGeocoder::locate`] selects the single road-network edge
//! that best represents the location. Candidate edges come from a
//! pluggable [`RoadGraph`], geometry from a pluggable [`Snapper`], and
//! name similarity from a pluggable [`RoadNameMatcher`] (default:
//! [`FuzzyRoadNameMatcher`]).
//!
//! Value types validate at construction so invalid tuning surfaces
//! before any query runs.

pub mod config;
pub mod distance;
pub mod edge;
pub mod geocoder;
pub mod graph;
pub mod heading;
pub mod matcher;
pub mod percent;
pub mod road_name;
pub mod snap;
pub mod standardize;
pub mod test_support;

pub use config::{MatchConfig, MatchConfigBuilder, MatchConfigError};
pub use distance::{Distance, DistanceError};
pub use edge::Edge;
pub use geocoder::{LocateError, Match, Request, ReverseGeocoder};
pub use graph::{CollaboratorError, RoadGraph};
pub use heading::{Angle, AngleError, CompassDirection, ParseCompassDirectionError};
pub use matcher::{FuzzyRoadNameMatcher, RoadNameMatcher};
pub use percent::{Percent, PercentError};
pub use road_name::{RoadName, RoadNameError};
pub use snap::{SnapResult, Snapper};
pub use standardize::RoadNameStandardizer;
