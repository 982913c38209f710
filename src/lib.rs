#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

#[doc(hidden)]
pub mod error;
pub mod matched;
pub mod primitive;
pub mod snap;

#[doc(inline)]
pub use error::{GeometryError, MatchError};
#[doc(inline)]
pub use matched::{EdgeMatch, EdgeMatchBuilder, MatchedPath, WayGeometry};
#[doc(inline)]
pub use primitive::{Direction, DirectionAwareEdgeId, EdgeState, Entry, Node, RoadEdge};
#[doc(inline)]
pub use snap::{GpsFix, GpsSnap, SnappedPosition, Snapped};
