//! Matched-edge records produced by the map-matching engine.
//!
//! Each [`EdgeMatch`] is one edge of the matched path, together with the
//! snapped fixes assigned to it. A [`MatchedPath`] is the ordered collection
//! of those records for one trace.

#[doc(hidden)]
pub mod builder;
#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod path;

#[doc(inline)]
pub use builder::EdgeMatchBuilder;
#[doc(inline)]
pub use entity::*;
#[doc(inline)]
pub use path::MatchedPath;
