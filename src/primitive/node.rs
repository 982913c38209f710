use geo::Point;
use std::fmt::{Display, Formatter};

use crate::primitive::Entry;

/// The standardised node primitive containing a generic
/// identifier which must implement [Entry], and contain
/// some given [Point].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a given `Point` and `id`.
    pub fn new(position: Point, id: E) -> Self {
        Self { id, position }
    }
}

impl<E> Display for Node<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            self.id.identifier(),
            self.position.x(),
            self.position.y()
        )
    }
}
