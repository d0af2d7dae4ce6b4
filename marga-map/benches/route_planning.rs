//! Benchmark nearest-frontier search on lattice-shaped graphs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga_map::{Direction, FrontierRegistry, GridCoord, NodeId, Openings, TrackGraph};
use marga_map::{RoutePlanner, find_route_to_nearest_frontier};

/// Square lattice of `side * side` nodes spaced `spacing` cells apart.
///
/// Every node is linked to its right and lower neighbour. Only the far
/// corner keeps an unexplored segment, so the search has to cross the
/// whole lattice.
fn lattice(side: i32, spacing: i32) -> (TrackGraph, NodeId) {
    let mut graph = TrackGraph::new();
    let mut ids = Vec::with_capacity((side * side) as usize);

    for y in 0..side {
        for x in 0..side {
            let openings = if x == side - 1 && y == side - 1 {
                Openings::new(true, false, false)
            } else {
                Openings::default()
            };
            let id = graph
                .create_node(
                    GridCoord::new(x * spacing, y * spacing),
                    Direction::East,
                    openings,
                )
                .unwrap();
            ids.push(id);
        }
    }

    for y in 0..side {
        for x in 0..side {
            let here = ids[(y * side + x) as usize];
            if x + 1 < side {
                graph.link_nodes(here, ids[(y * side + x + 1) as usize]).unwrap();
            }
            if y + 1 < side {
                graph.link_nodes(here, ids[((y + 1) * side + x) as usize]).unwrap();
            }
        }
    }

    (graph, ids[0])
}

fn bench_nearest_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_frontier");

    for side in [4, 8, 16, 32] {
        let (graph, start) = lattice(side, 3);
        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);

        group.bench_with_input(BenchmarkId::new("lattice", side * side), &side, |b, _| {
            b.iter(|| {
                find_route_to_nearest_frontier(black_box(&graph), black_box(&frontier), start)
            })
        });
    }

    group.finish();
}

fn bench_frontier_refresh(c: &mut Criterion) {
    let (graph, _) = lattice(32, 3);
    let mut frontier = FrontierRegistry::new();

    c.bench_function("frontier_refresh_1024", |b| {
        b.iter(|| {
            frontier.refresh(black_box(&graph));
            frontier.len()
        })
    });
}

fn bench_bounded_planner(c: &mut Criterion) {
    let (graph, start) = lattice(32, 3);
    let mut frontier = FrontierRegistry::new();
    frontier.refresh(&graph);
    // Every other node settles before the far corner, so the cap covers all 1024.
    let planner = RoutePlanner::new().with_max_expansions(Some(2048));

    c.bench_function("bounded_planner_1024", |b| {
        b.iter(|| planner.plan(black_box(&graph), black_box(&frontier), start).unwrap())
    });
}

criterion_group!(
    benches,
    bench_nearest_frontier,
    bench_frontier_refresh,
    bench_bounded_planner
);
criterion_main!(benches);
