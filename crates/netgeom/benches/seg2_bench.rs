//! Criterion benchmarks for segment-pair classification.
//! Fixed cases cover each classifier phase; the random case and the
//! all-pairs sweep measure the mixed workload the pipeline actually sees.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use netgeom::seg2::pairwise_intersections;
use netgeom::seg2::rand::{draw_edge, draw_edge_pair, EdgeCfg, ReplayToken};
use netgeom::{segment_intersect, Edge2, DEFAULT_TOL};

fn fixed_pair(kind: &str) -> (Edge2, Edge2) {
    match kind {
        "crossing" => (
            Edge2::new((0.0, 0.0), (1.0, 1.0)),
            Edge2::new((0.0, 1.0), (1.0, 0.0)),
        ),
        "parallel" => (
            Edge2::new((0.0, 0.0), (1.0, 0.0)),
            Edge2::new((0.0, 1.0), (1.0, 1.0)),
        ),
        "collinear" => (
            Edge2::new((0.0, 0.0), (2.0, 0.0)),
            Edge2::new((1.0, 0.0), (3.0, 0.0)),
        ),
        "shared_end" => (
            Edge2::new((0.0, 0.0), (1.0, 0.0)),
            Edge2::new((1.0, 0.0), (1.0, 1.0)),
        ),
        _ => unreachable!("unknown case label"),
    }
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("seg2");
    for kind in ["crossing", "parallel", "collinear", "shared_end"] {
        group.bench_with_input(BenchmarkId::new("classify", kind), &kind, |b, &kind| {
            let (s1, s2) = fixed_pair(kind);
            b.iter(|| segment_intersect(&s1, &s2, DEFAULT_TOL));
        });
    }
    group.bench_function("classify/random", |b| {
        let mut index = 0u64;
        b.iter_batched(
            || {
                index += 1;
                draw_edge_pair(EdgeCfg::default(), ReplayToken { seed: 43, index })
            },
            |(s1, s2)| segment_intersect(&s1, &s2, DEFAULT_TOL),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("seg2_pairwise");
    for &n in &[10usize, 50, 100] {
        group.bench_with_input(BenchmarkId::new("all_pairs", n), &n, |b, &n| {
            let edges: Vec<Edge2> = (0..n as u64)
                .map(|index| draw_edge(EdgeCfg::default(), ReplayToken { seed: 7, index }))
                .collect();
            b.iter(|| {
                pairwise_intersections(&edges, DEFAULT_TOL)
                    .filter(|(_, _, r)| r.intersects)
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_pairwise);
criterion_main!(benches);
