use geo::{Distance, Haversine, LineString, Point};
use rstar::AABB;
use std::fmt::{Display, Formatter};
use strum::Display as StrumDisplay;

use crate::error::GeometryError;
use crate::primitive::{Entry, Node};

/// The capability surface a matched record needs from an edge of the road graph.
///
/// An implementor is a reference to one directed traversal of an edge, able to
/// produce its shape and to describe itself for diagnostics.
pub trait EdgeState: Display {
    type Error: std::error::Error;

    /// Fetches the shape of the edge in its traversal direction,
    /// beginning at the point index `from`.
    fn fetch_geometry(&self, from: usize) -> Result<LineString, Self::Error>;
}

impl<T> EdgeState for &T
where
    T: EdgeState + ?Sized,
{
    type Error = T::Error;

    #[inline]
    fn fetch_geometry(&self, from: usize) -> Result<LineString, Self::Error> {
        (**self).fetch_geometry(from)
    }
}

/// Direction of travel along an edge, relative to the order in which
/// its geometry is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    #[default]
    Outgoing,
    Incoming,
}

/// Represents an edge within the system, along with the directionality of the edge.
///
/// Any bidirectional road is therefore two edges, each with a different direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionAwareEdgeId<E>
where
    E: Entry,
{
    id: E,
    direction: Direction,
}

impl<E> DirectionAwareEdgeId<E>
where
    E: Entry,
{
    pub fn new(id: E) -> Self {
        Self {
            id,
            direction: Direction::Outgoing,
        }
    }

    /// The underlying identifier of the edge.
    pub fn index(&self) -> E {
        self.id
    }

    /// If the direction-aware edge is forward-facing.
    pub fn forward(self) -> Self {
        DirectionAwareEdgeId {
            direction: Direction::Outgoing,
            ..self
        }
    }

    /// If the direction-aware edge is rear/backward-facing.
    pub fn backward(self) -> Self {
        DirectionAwareEdgeId {
            direction: Direction::Incoming,
            ..self
        }
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

/// A concrete road edge, carrying its own shape.
///
/// The stored shape runs from [base](#field.base), through every
/// [pillar](#field.pillars), to [adjacent](#field.adjacent). An edge whose
/// [id](#field.id) is [`Direction::Incoming`] is traversed in reverse, so its
/// geometry is fetched from adjacent back to base.
///
///      base     pillars      adjacent
///       +-----o-----o-----o-----+
///       0     1     2     3     4    <- Outgoing indices
///
#[derive(Clone, Debug, PartialEq)]
pub struct RoadEdge<E>
where
    E: Entry,
{
    pub id: DirectionAwareEdgeId<E>,

    pub base: Node<E>,
    pub adjacent: Node<E>,
    pub pillars: Vec<Point>,
}

impl<E> RoadEdge<E>
where
    E: Entry,
{
    pub fn new(id: DirectionAwareEdgeId<E>, base: Node<E>, adjacent: Node<E>) -> Self {
        Self {
            id,
            base,
            adjacent,
            pillars: Vec::new(),
        }
    }

    pub fn with_pillars(self, pillars: impl IntoIterator<Item = Point>) -> Self {
        Self {
            pillars: pillars.into_iter().collect(),
            ..self
        }
    }

    /// The node the traversal starts from.
    pub fn source(&self) -> &Node<E> {
        match self.id.direction() {
            Direction::Outgoing => &self.base,
            Direction::Incoming => &self.adjacent,
        }
    }

    /// The node the traversal ends at.
    pub fn target(&self) -> &Node<E> {
        match self.id.direction() {
            Direction::Outgoing => &self.adjacent,
            Direction::Incoming => &self.base,
        }
    }

    /// Every point of the edge, in traversal order.
    fn shape(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.pillars.len() + 2);
        points.push(self.base.position);
        points.extend(self.pillars.iter().copied());
        points.push(self.adjacent.position);

        if self.id.direction() == Direction::Incoming {
            points.reverse();
        }

        points
    }

    /// The haversine length of the edge, in meters.
    pub fn length(&self) -> f64 {
        self.shape()
            .windows(2)
            .map(|pair| Haversine.distance(pair[0], pair[1]))
            .sum()
    }
}

impl<E> EdgeState for RoadEdge<E>
where
    E: Entry,
{
    type Error = GeometryError;

    fn fetch_geometry(&self, from: usize) -> Result<LineString, GeometryError> {
        let shape = self.shape();
        if from > shape.len() {
            return Err(GeometryError::OutOfRange {
                from,
                len: shape.len(),
            });
        }

        Ok(shape.into_iter().skip(from).collect::<LineString>())
    }
}

impl<E> Display for RoadEdge<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}->{} ({})",
            self.id.index().identifier(),
            self.source(),
            self.target(),
            self.id.direction()
        )
    }
}

impl<E> rstar::RTreeObject for RoadEdge<E>
where
    E: Entry,
{
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_points(&self.shape())
    }
}
