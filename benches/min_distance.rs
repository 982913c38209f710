use criterion::criterion_main;
use edge_match::{
    DirectionAwareEdgeId, EdgeMatch, GpsFix, GpsSnap, MatchedPath, Node, RoadEdge, SnappedPosition,
};
use geo::Point;
use std::hint::black_box;

struct DensityScenario {
    name: &'static str,
    edges: usize,
    snaps_per_edge: usize,
}

const DENSITY_CASES: [DensityScenario; 3] = [
    DensityScenario {
        name: "SPARSE",
        edges: 1_000,
        snaps_per_edge: 1,
    },
    DensityScenario {
        name: "URBAN",
        edges: 1_000,
        snaps_per_edge: 8,
    },
    DensityScenario {
        name: "HIGHWAY_STOP",
        edges: 10,
        snaps_per_edge: 2_000,
    },
];

fn build_path(sc: &DensityScenario) -> MatchedPath<RoadEdge<i64>, GpsSnap> {
    (0..sc.edges)
        .map(|edge| {
            let offset = edge as f64 * 1e-3;
            let road = RoadEdge::new(
                DirectionAwareEdgeId::new(edge as i64),
                Node::new(Point::new(offset, 0.0), edge as i64),
                Node::new(Point::new(offset + 1e-3, 0.0), edge as i64 + 1),
            )
            .with_pillars([Point::new(offset + 5e-4, 1e-4)]);

            let snaps = (0..sc.snaps_per_edge)
                .map(|index| {
                    let position = Point::new(offset, 1e-4);
                    let fix = GpsFix::new(position, index as i64);
                    let distance = ((index * 7919) % 97) as f64 + 0.5;
                    GpsSnap::new(fix, position, distance, 0, SnappedPosition::Edge, index)
                })
                .collect::<Vec<_>>();

            EdgeMatch::new(road, snaps)
        })
        .collect()
}

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("edge_match");
    group.significance_level(0.1).sample_size(30);

    DENSITY_CASES.iter().for_each(|sc| {
        let path = build_path(sc);

        group.bench_function(format!("min_distance: {}", sc.name), |b| {
            b.iter(|| {
                let distance = path.min_distance().expect("Path must contain snaps");
                black_box(distance)
            })
        });

        group.bench_function(format!("geometry: {}", sc.name), |b| {
            b.iter(|| {
                let line = path.geometry().expect("Road edges always have geometry");
                black_box(line)
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
