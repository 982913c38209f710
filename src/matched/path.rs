use geo::{Coord, LineString};
use log::debug;
use std::ops::Deref;

use crate::error::MatchError;
use crate::matched::EdgeMatch;
use crate::primitive::EdgeState;
use crate::snap::Snapped;

/// The matched path of one trace, as an ordered run of [`EdgeMatch`] records.
///
/// Records appear in traversal order. Records without snaps are edges the
/// path passes through between matched fixes.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedPath<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    records: Vec<EdgeMatch<Ed, S>>,
}

impl<Ed, S> FromIterator<EdgeMatch<Ed, S>> for MatchedPath<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    fn from_iter<I: IntoIterator<Item = EdgeMatch<Ed, S>>>(iter: I) -> Self {
        let records = iter.into_iter().collect::<Vec<_>>();

        MatchedPath { records }
    }
}

impl<Ed, S> From<Vec<EdgeMatch<Ed, S>>> for MatchedPath<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    fn from(records: Vec<EdgeMatch<Ed, S>>) -> Self {
        MatchedPath { records }
    }
}

impl<Ed, S> Deref for MatchedPath<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    type Target = [EdgeMatch<Ed, S>];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<Ed, S> MatchedPath<Ed, S>
where
    Ed: EdgeState,
    S: Snapped,
{
    /// Total number of snapped fixes across every record.
    pub fn snap_count(&self) -> usize {
        self.records.iter().map(EdgeMatch::len).sum()
    }

    /// Number of records traversed without any snapped fix.
    pub fn unmatched(&self) -> usize {
        self.records.iter().filter(|record| record.is_empty()).count()
    }

    /// The smallest query distance across the whole path.
    ///
    /// Empty records are skipped and NaN distances never win. Fails with
    /// [`MatchError::IllegalState`] when no record holds a snap, and yields
    /// NaN when every snap on the path has a NaN distance.
    pub fn min_distance(&self) -> Result<f64, MatchError> {
        if self.snap_count() == 0 {
            return Err(MatchError::IllegalState(format!(
                "path of {} edges",
                self.records.len()
            )));
        }

        Ok(self
            .records
            .iter()
            .filter_map(EdgeMatch::nearest)
            .map(|snap| snap.query_distance())
            .reduce(|min, distance| if distance < min { distance } else { min })
            .unwrap_or(f64::NAN))
    }

    /// Joins the geometry of every record into one line.
    ///
    /// Consecutive records usually share their joining point, which is kept once.
    pub fn geometry(&self) -> Result<LineString, Ed::Error> {
        let mut coords: Vec<Coord> = Vec::new();

        for record in &self.records {
            let line = record.geometry()?;
            let shared = matches!(
                (coords.last(), line.0.first()),
                (Some(last), Some(first)) if last == first
            );

            coords.extend(line.0.iter().skip(usize::from(shared)).copied());
        }

        debug!(
            "Joined {} records into {} coordinates",
            self.records.len(),
            coords.len()
        );

        Ok(LineString::new(coords))
    }
}
