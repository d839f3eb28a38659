//! Single-pass best-edge selection.
//!
//! [`ReverseGeocoder::locate`] resolves a point location, an optional
//! heading, and an optional road-name hint to the single best edge. The
//! selection streams over the candidates once, preferring road-name
//! closeness first and snap distance second: only candidates whose
//! closeness is at least the best seen so far compete on distance.

use geo::{Coord, Rect};
use log::{debug, trace};
use thiserror::Error;

use crate::graph::{CollaboratorError, RoadGraph};
use crate::snap::{SnapResult, Snapper};
use crate::{Angle, Distance, Edge, MatchConfig, Percent, RoadName};

/// Approximate metres spanned by one degree of latitude on WGS84.
const METRES_PER_DEGREE: f64 = 111_320.0;
/// Floor for the longitude cosine correction, so bounds stay finite at
/// the poles.
const MIN_LONGITUDE_SCALE: f64 = 0.01;

/// A reverse-geocoding query.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use kerbside_core::{Request, RoadName};
///
/// # fn main() -> Result<(), kerbside_core::RoadNameError> {
/// let request = Request {
///     road_name: Some(RoadName::new("Main St")?),
///     ..Request::at(Coord { x: -122.3, y: 47.6 })
/// };
/// assert!(request.heading.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Location to resolve (`x = longitude`, `y = latitude`, WGS84).
    pub location: Coord<f64>,
    /// Restrict candidates to edges travelling in roughly this bearing.
    pub heading: Option<Angle>,
    /// The name the caller believes the road carries.
    pub road_name: Option<RoadName>,
}

impl Request {
    /// A query for `location` with no heading or name hint.
    #[must_use]
    pub const fn at(location: Coord<f64>) -> Self {
        Self {
            location,
            heading: None,
            road_name: None,
        }
    }
}

/// The edge selected for a request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// The winning edge.
    pub edge: Edge,
    /// Projection of the request location onto the edge.
    pub snap: SnapResult,
    /// Road-name closeness of the winning edge. 100% when the request
    /// named no road, since name matching then succeeds vacuously.
    pub closeness: Percent,
}

/// Errors returned by [`ReverseGeocoder::locate`].
///
/// A location with no matching edge is not an error; `locate` reports it
/// as `Ok(None)`.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Candidate enumeration failed in the road graph.
    #[error("road graph query failed: {source}")]
    Graph {
        /// Failure reported by the graph collaborator.
        #[source]
        source: CollaboratorError,
    },
    /// Projecting the request location onto an edge failed.
    #[error("snapping onto edge {edge} failed: {source}")]
    Snap {
        /// Identifier of the edge being snapped to.
        edge: u64,
        /// Failure reported by the snapper collaborator.
        #[source]
        source: CollaboratorError,
    },
}

/// Resolve point locations to the road-network edge that best represents
/// them.
///
/// The geocoder owns no mutable state: all bookkeeping is local to each
/// [`locate`](Self::locate) call, so one instance may serve concurrent
/// queries as long as its graph and snapper tolerate concurrent reads.
#[derive(Debug)]
pub struct ReverseGeocoder<G, S> {
    graph: G,
    snapper: S,
    config: MatchConfig,
}

impl<G, S> ReverseGeocoder<G, S>
where
    G: RoadGraph,
    S: Snapper,
{
    /// Construct a geocoder over `graph` and `snapper`.
    #[must_use]
    pub const fn new(graph: G, snapper: S, config: MatchConfig) -> Self {
        Self {
            graph,
            snapper,
            config,
        }
    }

    /// The configuration this geocoder was built with.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Find the best edge for `request`, or `None` when no candidate
    /// passes the heading and closeness gates within the search radius.
    ///
    /// Candidates are screened in one streaming pass. An edge survives
    /// the name gate only while its closeness beats the configured
    /// threshold strictly and matches or beats the best closeness seen so
    /// far; survivors then compete on snap distance. The running shortest
    /// snap distance carries across closeness levels, so a later
    /// candidate with a stronger name but a farther snap still loses to
    /// the match already recorded.
    ///
    /// # Errors
    ///
    /// Collaborator failures abort the whole call and surface as
    /// [`LocateError`]; no partial result is recovered.
    pub fn locate(&self, request: &Request) -> Result<Option<Match>, LocateError> {
        let desired = self.desired_name(request);
        let bounds = search_bounds(request.location, self.config.within());
        let candidates = self
            .graph
            .edges_intersecting(&bounds)
            .map_err(|source| LocateError::Graph { source })?;

        let mut closest_distance = Distance::MAX;
        let mut highest_closeness = Percent::ZERO;
        let mut best = None;

        for edge in candidates {
            if let Some(heading) = request.heading {
                if edge.heading.difference(heading) > self.config.heading_tolerance() {
                    trace!(
                        "edge {}: heading {}° too far from requested {}°",
                        edge.id,
                        edge.heading.as_degrees(),
                        heading.as_degrees()
                    );
                    continue;
                }
            }

            let closeness = match desired.as_ref() {
                None => Percent::HUNDRED,
                Some(desired) => self.best_name_closeness(&edge, desired),
            };
            if desired.is_some()
                && !(closeness > self.config.road_name_closeness()
                    && closeness >= highest_closeness)
            {
                trace!(
                    "edge {}: name closeness {:.1}% fails the gate",
                    edge.id,
                    closeness.value()
                );
                continue;
            }

            highest_closeness = closeness;
            let snap = self
                .snapper
                .snap(&edge, request.location)
                .map_err(|source| LocateError::Snap {
                    edge: edge.id,
                    source,
                })?;
            if snap.distance_to_source < closest_distance {
                closest_distance = snap.distance_to_source;
                debug!(
                    "edge {} leads at {:.1} m with closeness {:.1}%",
                    edge.id,
                    snap.distance_to_source.as_metres(),
                    closeness.value()
                );
                best = Some(Match {
                    edge,
                    snap,
                    closeness,
                });
            }
        }

        Ok(best)
    }

    /// The name to match against, standardized when a standardizer is
    /// configured. `None` when the request named no road.
    fn desired_name(&self, request: &Request) -> Option<RoadName> {
        request.road_name.as_ref().map(|name| {
            self.config
                .standardizer()
                .map_or_else(|| name.clone(), |standardizer| standardizer.standardize(name))
        })
    }

    /// The best closeness across all of `edge`'s names (0% for an
    /// unnamed edge).
    ///
    /// When the desired name carries a direction token and a candidate
    /// name does not, the candidate is augmented with the edge's heading
    /// as a compass token before scoring. Undirected names on
    /// directionally split roads would otherwise never reach 100%.
    fn best_name_closeness(&self, edge: &Edge, desired: &RoadName) -> Percent {
        let desired_direction = desired.direction();
        let mut best = Percent::ZERO;
        for name in &edge.names {
            let candidate = if desired_direction.is_some() && name.direction().is_none() {
                name.with_direction(edge.heading.compass())
            } else {
                name.clone()
            };
            let candidate = self
                .config
                .standardizer()
                .map_or(candidate.clone(), |standardizer| {
                    standardizer.standardize(&candidate)
                });
            let closeness = self.config.matcher().matches(&candidate, desired);
            if closeness > best {
                best = closeness;
            }
        }
        best
    }
}

/// Axis-aligned search bounds: the request location padded by the search
/// radius, converted from metres to degrees with a cosine-corrected
/// longitude axis.
fn search_bounds(location: Coord<f64>, within: Distance) -> Rect<f64> {
    let lat_padding = within.as_metres() / METRES_PER_DEGREE;
    let longitude_scale = location
        .y
        .to_radians()
        .cos()
        .abs()
        .max(MIN_LONGITUDE_SCALE);
    let lon_padding = within.as_metres() / (METRES_PER_DEGREE * longitude_scale);
    Rect::new(
        Coord {
            x: location.x - lon_padding,
            y: location.y - lat_padding,
        },
        Coord {
            x: location.x + lon_padding,
            y: location.y + lat_padding,
        },
    )
}
