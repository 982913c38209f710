use thiserror::Error;

/// Failures raised while building or querying an [`EdgeMatch`](crate::EdgeMatch).
///
/// Both variants are precondition violations of the caller; neither is
/// recoverable inside the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    #[error("no minimal distance for {0}")]
    IllegalState(String),
}

/// Failures raised by [`RoadEdge`](crate::primitive::RoadEdge) when fetching its shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("geometry index {from} out of range for edge of {len} points")]
    OutOfRange { from: usize, len: usize },
}
