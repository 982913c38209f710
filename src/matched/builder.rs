use geo::LineString;

use crate::error::MatchError;
use crate::matched::EdgeMatch;
use crate::primitive::EdgeState;
use crate::snap::Snapped;

/// Assembles an [`EdgeMatch`] from parts gathered over the course of a match.
///
/// ```rust
/// use edge_match::{DirectionAwareEdgeId, EdgeMatch, GpsSnap, MatchError, Node, RoadEdge};
/// use geo::Point;
///
/// let edge = RoadEdge::new(
///     DirectionAwareEdgeId::new(7_i64),
///     Node::new(Point::new(0.0, 0.0), 1),
///     Node::new(Point::new(0.0, 1.0), 2),
/// );
///
/// let missing = EdgeMatch::<RoadEdge<i64>, GpsSnap>::builder().edge(edge).build();
/// assert_eq!(missing, Err(MatchError::InvalidArgument("snaps")));
/// ```
#[derive(Clone, Debug)]
pub struct EdgeMatchBuilder<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    edge: Option<Ed>,
    snaps: Option<Vec<S>>,
    geometry: Option<LineString>,
}

impl<Ed, S> Default for EdgeMatchBuilder<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    fn default() -> Self {
        Self {
            edge: None,
            snaps: None,
            geometry: None,
        }
    }
}

impl<Ed, S> EdgeMatchBuilder<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    pub fn edge(self, edge: Ed) -> Self {
        Self {
            edge: Some(edge),
            ..self
        }
    }

    pub fn snaps(self, snaps: impl IntoIterator<Item = S>) -> Self {
        Self {
            snaps: Some(snaps.into_iter().collect()),
            ..self
        }
    }

    pub fn geometry(self, geometry: LineString) -> Self {
        Self {
            geometry: Some(geometry),
            ..self
        }
    }

    pub fn build(self) -> Result<EdgeMatch<Ed, S>, MatchError> {
        EdgeMatch::try_new(self.edge, self.snaps, self.geometry)
    }
}
