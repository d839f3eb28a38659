//! Test-only collaborator implementations used by unit and behaviour
//! tests: an in-memory road graph, a haversine snapper, and failing
//! doubles for error-propagation coverage.

use geo::{Closest, ClosestPoint, Coord, Distance as _, Haversine, Intersects, Point, Rect};
use thiserror::Error;

use crate::graph::{CollaboratorError, RoadGraph};
use crate::snap::{SnapResult, Snapper};
use crate::{Distance, Edge};

/// Linear-scan [`RoadGraph`] over an in-memory edge list.
///
/// The scan visits edges in insertion order, which keeps tie-break
/// behaviour deterministic in tests. Intended only for small datasets.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    edges: Vec<Edge>,
}

impl MemoryGraph {
    /// Create a graph containing a single edge.
    #[must_use]
    pub fn with_edge(edge: Edge) -> Self {
        Self::with_edges(std::iter::once(edge))
    }

    /// Create a graph from a collection of edges.
    pub fn with_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        Self {
            edges: edges.into_iter().collect(),
        }
    }
}

impl RoadGraph for MemoryGraph {
    fn edges_intersecting(
        &self,
        bounds: &Rect<f64>,
    ) -> Result<Box<dyn Iterator<Item = Edge> + Send + '_>, CollaboratorError> {
        let bounds = *bounds;
        Ok(Box::new(
            self.edges
                .iter()
                // `Intersects` treats boundary contact as intersection.
                .filter(move |edge| bounds.intersects(&edge.geometry))
                .cloned(),
        ))
    }
}

/// Error produced when an edge offers no geometry to project onto.
#[derive(Debug, Error)]
#[error("edge {edge} has no geometry to snap onto")]
pub struct IndeterminateSnap {
    /// Identifier of the offending edge.
    pub edge: u64,
}

/// [`Snapper`] that projects onto edge geometry and measures the
/// haversine distance to the projection.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineSnapper;

impl Snapper for HaversineSnapper {
    fn snap(&self, edge: &Edge, location: Coord<f64>) -> Result<SnapResult, CollaboratorError> {
        let target = Point::from(location);
        let point = match edge.geometry.closest_point(&target) {
            Closest::Intersection(point) | Closest::SinglePoint(point) => point,
            Closest::Indeterminate => return Err(IndeterminateSnap { edge: edge.id }.into()),
        };
        let distance = Distance::metres(Haversine.distance(target, point))?;
        Ok(SnapResult {
            point: point.into(),
            distance_to_source: distance,
        })
    }
}

/// [`RoadGraph`] double whose enumeration always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingGraph;

impl RoadGraph for FailingGraph {
    fn edges_intersecting(
        &self,
        _bounds: &Rect<f64>,
    ) -> Result<Box<dyn Iterator<Item = Edge> + Send + '_>, CollaboratorError> {
        Err("road graph unavailable".into())
    }
}

/// [`Snapper`] double that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSnapper;

impl Snapper for FailingSnapper {
    fn snap(&self, _edge: &Edge, _location: Coord<f64>) -> Result<SnapResult, CollaboratorError> {
        Err("snapper unavailable".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Angle;
    use geo::LineString;
    use rstest::rstest;

    fn vertical_edge(id: u64, x: f64) -> Edge {
        Edge::unnamed(
            id,
            LineString::from(vec![Coord { x, y: -0.001 }, Coord { x, y: 0.001 }]),
            Angle::degrees(0.0).unwrap(),
        )
    }

    #[rstest]
    fn memory_graph_filters_by_bounds() {
        let graph = MemoryGraph::with_edges([vertical_edge(1, 0.0), vertical_edge(2, 5.0)]);
        let bounds = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
        let found: Vec<_> = graph.edges_intersecting(&bounds).unwrap().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[rstest]
    fn memory_graph_preserves_insertion_order() {
        let graph = MemoryGraph::with_edges([vertical_edge(2, 0.0), vertical_edge(1, 0.0)]);
        let bounds = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
        let ids: Vec<_> = graph
            .edges_intersecting(&bounds)
            .unwrap()
            .map(|edge| edge.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[rstest]
    fn haversine_snapper_projects_onto_the_edge() {
        let edge = vertical_edge(1, 0.001);
        let snap = HaversineSnapper
            .snap(&edge, Coord { x: 0.0, y: 0.0 })
            .unwrap();
        // 0.001° of longitude at the equator is roughly 111 m.
        let metres = snap.distance_to_source.as_metres();
        assert!((metres - 111.3).abs() < 1.0, "unexpected distance {metres}");
        assert!((snap.point.x - 0.001).abs() < 1e-9);
        assert!(snap.point.y.abs() < 1e-9);
    }

    #[rstest]
    fn haversine_snapper_rejects_empty_geometry() {
        let edge = Edge::unnamed(9, LineString::new(Vec::new()), Angle::degrees(0.0).unwrap());
        let error = HaversineSnapper
            .snap(&edge, Coord { x: 0.0, y: 0.0 })
            .unwrap_err();
        assert!(error.to_string().contains("edge 9"));
    }
}
