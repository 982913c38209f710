//! Snap results: raw GPS fixes projected onto a candidate edge.

use geo::Point;
use std::fmt::{Display, Formatter};
use strum::{AsRefStr, Display as StrumDisplay};


/// The capability surface a matched record needs from one snap result.
pub trait Snapped: Display {
    /// Perpendicular distance, in meters, from the raw fix to its snapped point.
    fn query_distance(&self) -> f64;
}

impl<T> Snapped for &T
where
    T: Snapped + ?Sized,
{
    #[inline]
    fn query_distance(&self) -> f64 {
        (**self).query_distance()
    }
}

/// One raw observation from a device trace.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsFix {
    /// Longitude (x) and latitude (y) of the observation.
    pub position: Point,
    /// Epoch milliseconds.
    pub time: i64,
    pub elevation: Option<f64>,
}

impl GpsFix {
    pub fn new(position: Point, time: i64) -> Self {
        Self {
            position,
            time,
            elevation: None,
        }
    }

    pub fn with_elevation(self, elevation: f64) -> Self {
        Self {
            elevation: Some(elevation),
            ..self
        }
    }
}

/// Where on the edge a fix landed once snapped.
///
///      Tower   Pillar        Edge
///        +-------o------------|----+
///
/// A tower is a junction node, a pillar is a shape point, anything
/// else lies somewhere along a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SnappedPosition {
    Tower,
    Pillar,
    Edge,
}

/// A [`GpsFix`] projected onto the nearest point of an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsSnap {
    pub fix: GpsFix,
    pub snapped: Point,
    pub query_distance: f64,

    /// Index of the geometry segment the snapped point lies on.
    pub way_index: usize,
    pub position: SnappedPosition,

    /// Index of the fix within the source trace.
    pub fix_index: usize,
}

impl GpsSnap {
    pub fn new(
        fix: GpsFix,
        snapped: Point,
        query_distance: f64,
        way_index: usize,
        position: SnappedPosition,
        fix_index: usize,
    ) -> Self {
        Self {
            fix,
            snapped,
            query_distance,
            way_index,
            position,
            fix_index,
        }
    }
}

impl Snapped for GpsSnap {
    #[inline]
    fn query_distance(&self) -> f64 {
        self.query_distance
    }
}

impl Display for GpsSnap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ({}, {}) -> ({}, {}) @ {}m {}",
            self.fix_index,
            self.fix.position.x(),
            self.fix.position.y(),
            self.snapped.x(),
            self.snapped.y(),
            self.query_distance,
            self.position
        )
    }
}
