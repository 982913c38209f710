use crate::error::GeometryError;
use crate::primitive::{Direction, DirectionAwareEdgeId, EdgeState, Node, RoadEdge};

use approx::assert_relative_eq;
use geo::{Point, wkt};
use rstar::RTreeObject;

fn kinked_edge(id: DirectionAwareEdgeId<i64>) -> RoadEdge<i64> {
    let base = Node::new(Point::new(-77.0300, 38.9100), 1);
    let adjacent = Node::new(Point::new(-77.0280, 38.9120), 2);

    RoadEdge::new(id, base, adjacent).with_pillars([
        Point::new(-77.0295, 38.9104),
        Point::new(-77.0288, 38.9111),
    ])
}

#[test]
fn outgoing_geometry_from_start() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10));
    let geometry = edge.fetch_geometry(0).expect("full geometry must be available");

    let expected = wkt! {
        LINESTRING (-77.0300 38.9100, -77.0295 38.9104, -77.0288 38.9111, -77.0280 38.9120)
    };

    assert_eq!(geometry, expected);
}

#[test]
fn incoming_geometry_is_reversed() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10).backward());
    let geometry = edge.fetch_geometry(0).expect("full geometry must be available");

    let expected = wkt! {
        LINESTRING (-77.0280 38.9120, -77.0288 38.9111, -77.0295 38.9104, -77.0300 38.9100)
    };

    assert_eq!(geometry, expected);
    assert_eq!(edge.source().id, 2);
    assert_eq!(edge.target().id, 1);
}

#[test]
fn geometry_offset_skips_leading_points() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10));

    let tail = edge.fetch_geometry(2).expect("offset within edge");
    assert_eq!(tail.0.len(), 2);
    assert_eq!(Point::from(tail.0[0]), Point::new(-77.0288, 38.9111));

    let past_end = edge.fetch_geometry(4).expect("offset at end is empty");
    assert!(past_end.0.is_empty());
}

#[test]
fn geometry_offset_out_of_range() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10));

    assert_eq!(
        edge.fetch_geometry(5),
        Err(GeometryError::OutOfRange { from: 5, len: 4 })
    );
}

#[test]
fn length_is_direction_independent() {
    let forward = kinked_edge(DirectionAwareEdgeId::new(10));
    let backward = kinked_edge(DirectionAwareEdgeId::new(10).backward());

    assert!(forward.length() > 0.0);
    assert_relative_eq!(forward.length(), backward.length(), epsilon = 1e-9);
}

#[test]
fn direction_flips_keep_identifier() {
    let forward = DirectionAwareEdgeId::new(1_i64);
    let backward = forward.backward();

    assert_eq!(forward.direction(), Direction::Outgoing);
    assert_eq!(backward.direction(), Direction::Incoming);
    assert_eq!(backward.index(), 1);
    assert_ne!(forward, backward);
    assert_eq!(backward.forward(), forward);
}

#[test]
fn envelope_covers_pillars() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10));
    let envelope = edge.envelope();

    assert_eq!(envelope.lower(), Point::new(-77.0300, 38.9100));
    assert_eq!(envelope.upper(), Point::new(-77.0280, 38.9120));
}

#[test]
fn display_names_traversal() {
    let edge = kinked_edge(DirectionAwareEdgeId::new(10).backward());
    let shown = edge.to_string();

    assert!(shown.starts_with("10 2("));
    assert!(shown.ends_with("(incoming)"));
}
