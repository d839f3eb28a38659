//! Geometric point-to-edge projection seam.

use geo::Coord;

use crate::graph::CollaboratorError;
use crate::{Distance, Edge};

/// The projection of a query location onto an edge's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapResult {
    /// Closest position along the edge.
    pub point: Coord<f64>,
    /// Distance from the query location to `point`.
    pub distance_to_source: Distance,
}

/// Project locations onto edge geometry.
///
/// The engine treats snapping as an external capability: implementations
/// own the closest-point-on-segment mathematics and the distance metric.
/// They must be safe for concurrent read access.
pub trait Snapper {
    /// Project `location` onto `edge`'s geometry.
    fn snap(&self, edge: &Edge, location: Coord<f64>) -> Result<SnapResult, CollaboratorError>;
}
