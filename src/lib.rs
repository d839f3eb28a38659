//! Facade crate for the kerbside reverse-geocoding engine.
//!
//! This crate re-exports the core matching API: build a [`MatchConfig`],
//! wire in a [`RoadGraph`] and a [`Snapper`], and resolve point locations
//! to road-network edges through [`ReverseGeocoder::locate`].

#![forbid(unsafe_code)]

pub use kerbside_core::{
    Angle, AngleError, CollaboratorError, CompassDirection, Distance, DistanceError, Edge,
    FuzzyRoadNameMatcher, LocateError, Match, MatchConfig, MatchConfigBuilder, MatchConfigError,
    ParseCompassDirectionError, Percent, PercentError, Request, ReverseGeocoder, RoadGraph,
    RoadName, RoadNameError, RoadNameMatcher, RoadNameStandardizer, SnapResult, Snapper,
};
