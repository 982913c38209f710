//! Road-network primitives a matched edge refers to.
//!
//! The matching engine owns the real graph; these types describe the
//! capability surface an [`EdgeMatch`](crate::EdgeMatch) needs from it.

use std::fmt::Debug;
use std::hash::Hash;

pub mod edge;
pub mod node;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use edge::*;
#[doc(inline)]
pub use node::Node;

/// An identifier within the road network.
pub trait Entry:
    Default + Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync
{
    fn identifier(&self) -> i64;
}

impl Entry for i64 {
    #[inline]
    fn identifier(&self) -> i64 {
        *self
    }
}
