//! Road-network edges.

use geo::LineString;

use crate::{Angle, RoadName};

/// A directed segment of the road network graph.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use geo::{Coord, LineString};
/// use kerbside_core::{Angle, Edge, RoadName};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let edge = Edge::new(
///     7,
///     LineString::from(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 0.001 }]),
///     Angle::degrees(0.0)?,
///     vec![RoadName::new("Main St")?],
/// );
/// assert_eq!(edge.id, 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Stable identifier within the source graph.
    pub id: u64,
    /// Shape of the edge.
    pub geometry: LineString<f64>,
    /// Bearing of travel along the edge.
    pub heading: Angle,
    /// Names carried by the edge. May be empty, and the same base name
    /// may repeat across the carriageways of a divided road.
    pub names: Vec<RoadName>,
}

impl Edge {
    /// Construct an edge.
    #[must_use]
    pub const fn new(id: u64, geometry: LineString<f64>, heading: Angle, names: Vec<RoadName>) -> Self {
        Self {
            id,
            geometry,
            heading,
            names,
        }
    }

    /// Construct an edge that carries no names.
    #[must_use]
    pub const fn unnamed(id: u64, geometry: LineString<f64>, heading: Angle) -> Self {
        Self::new(id, geometry, heading, Vec::new())
    }
}
