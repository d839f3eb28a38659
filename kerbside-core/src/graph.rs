//! Candidate-edge enumeration seam.

use geo::Rect;

use crate::Edge;

/// Failure raised by an external collaborator (road graph or snapper).
///
/// Collaborators are free to fail with their own error types; the engine
/// propagates them unchanged inside
/// [`LocateError`](crate::LocateError).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only access to the road network's spatial index.
///
/// The bounding box uses WGS84 coordinates (`x = longitude`,
/// `y = latitude`). Iteration order is unspecified; callers that depend
/// on deterministic tie-breaking must arrange it themselves.
/// Implementations must be safe for concurrent read access.
///
/// # Examples
///
/// ```
/// use geo::{Coord, Intersects, Rect};
/// use kerbside_core::{CollaboratorError, Edge, RoadGraph};
///
/// struct MemoryGraph {
///     edges: Vec<Edge>,
/// }
///
/// impl RoadGraph for MemoryGraph {
///     fn edges_intersecting(
///         &self,
///         bounds: &Rect<f64>,
///     ) -> Result<Box<dyn Iterator<Item = Edge> + Send + '_>, CollaboratorError> {
///         let bounds = *bounds;
///         Ok(Box::new(
///             self.edges
///                 .iter()
///                 .filter(move |edge| bounds.intersects(&edge.geometry))
///                 .cloned(),
///         ))
///     }
/// }
///
/// let graph = MemoryGraph { edges: Vec::new() };
/// let bounds = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
/// assert_eq!(graph.edges_intersecting(&bounds).unwrap().count(), 0);
/// ```
pub trait RoadGraph {
    /// Return the edges whose geometry intersects `bounds`.
    fn edges_intersecting(
        &self,
        bounds: &Rect<f64>,
    ) -> Result<Box<dyn Iterator<Item = Edge> + Send + '_>, CollaboratorError>;
}
