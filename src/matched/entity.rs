use geo::LineString;
use itertools::Itertools;
use log::trace;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::error::MatchError;
use crate::matched::EdgeMatchBuilder;
use crate::primitive::EdgeState;
use crate::snap::Snapped;

/// The shape used when drawing a matched edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WayGeometry {
    /// An explicit shape for this traversal, replacing the edge's own.
    Override(LineString),

    /// Resolve the shape lazily from the edge itself.
    #[default]
    Edge,
}

impl From<Option<LineString>> for WayGeometry {
    fn from(value: Option<LineString>) -> Self {
        match value {
            Some(line) => WayGeometry::Override(line),
            None => WayGeometry::Edge,
        }
    }
}

/// One edge of a matched path, with the snapped fixes assigned to it.
///
/// The record is immutable once built. Snaps keep the order in which they
/// were supplied, which is the order the fixes were travelled along the edge.
/// A record may hold no snaps at all, in which case the edge was traversed
/// between two matched fixes without any fix of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMatch<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    edge: Ed,
    snaps: Vec<S>,
    geometry: WayGeometry,
}

impl<Ed, S> EdgeMatch<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    /// Creates a record which draws the edge's own shape.
    pub fn new(edge: Ed, snaps: Vec<S>) -> Self {
        Self {
            edge,
            snaps,
            geometry: WayGeometry::Edge,
        }
    }

    /// Creates a record whose shape is `geometry` instead of the edge's own.
    pub fn with_geometry(edge: Ed, snaps: Vec<S>, geometry: LineString) -> Self {
        Self {
            edge,
            snaps,
            geometry: WayGeometry::Override(geometry),
        }
    }

    /// Creates a record from parts which may not have been produced.
    ///
    /// Fails with [`MatchError::InvalidArgument`] when either the edge or the
    /// snap sequence is absent. An empty snap sequence is valid.
    pub fn try_new(
        edge: Option<Ed>,
        snaps: Option<Vec<S>>,
        geometry: Option<LineString>,
    ) -> Result<Self, MatchError> {
        let edge = edge.ok_or(MatchError::InvalidArgument("edge"))?;
        let snaps = snaps.ok_or(MatchError::InvalidArgument("snaps"))?;

        Ok(Self {
            edge,
            snaps,
            geometry: WayGeometry::from(geometry),
        })
    }

    pub fn builder() -> EdgeMatchBuilder<Ed, S> {
        EdgeMatchBuilder::default()
    }

    /// If no fixes were snapped onto this edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snaps.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snaps.len()
    }

    #[inline]
    pub fn edge(&self) -> &Ed {
        &self.edge
    }

    /// The snapped fixes, in the order they were supplied.
    #[inline]
    pub fn snaps(&self) -> &[S] {
        &self.snaps
    }

    #[inline]
    pub fn has_override(&self) -> bool {
        matches!(self.geometry, WayGeometry::Override(_))
    }

    /// The snap closest to its raw fix.
    ///
    /// On ties the earliest snap wins. Snaps with a NaN distance are never
    /// chosen, so `None` is returned for an empty record or one holding only
    /// NaN distances.
    pub fn nearest(&self) -> Option<&S> {
        self.snaps
            .iter()
            .filter(|snap| !snap.query_distance().is_nan())
            .reduce(|best, snap| {
                if snap.query_distance() < best.query_distance() {
                    snap
                } else {
                    best
                }
            })
    }

    /// The smallest query distance of any snap on this edge.
    ///
    /// Undefined for an empty record, which fails with [`MatchError::IllegalState`].
    /// A record whose every distance is NaN has no comparable minimum and yields NaN.
    pub fn min_distance(&self) -> Result<f64, MatchError> {
        if self.is_empty() {
            return Err(MatchError::IllegalState(self.edge.to_string()));
        }

        Ok(self.nearest().map_or(f64::NAN, |snap| snap.query_distance()))
    }

    /// The shape of this traversal.
    ///
    /// An override is returned as-is. Otherwise the full shape is fetched
    /// from the edge, and any failure of that fetch is returned unchanged.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::TRACE))]
    pub fn geometry(&self) -> Result<Cow<'_, LineString>, Ed::Error> {
        match &self.geometry {
            WayGeometry::Override(line) => Ok(Cow::Borrowed(line)),
            WayGeometry::Edge => {
                trace!("Resolving geometry from edge {}", self.edge);
                self.edge.fetch_geometry(0).map(Cow::Owned)
            }
        }
    }
}

impl<Ed, S> Display for EdgeMatch<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "edge: {}, snaps: [{}]",
            self.edge,
            self.snaps.iter().join(", ")
        )
    }
}
