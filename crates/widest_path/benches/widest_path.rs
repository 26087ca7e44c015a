use std::hint::black_box;

use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::distinct_endpoints;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use widest_path::BottleneckPath;
use widest_path::MaximumSpanningTree;
use widest_path::PathError;
use widest_path::UndirectedGraph;
use widest_path::generator::GenerationPolicy;
use widest_path::generator::generate_seeded;
use widest_path::widest_path_indexed_heap;
use widest_path::widest_path_linear_scan;
use widest_path::widest_path_spanning_tree;

type Strategy = fn(&UndirectedGraph, usize, usize) -> Result<BottleneckPath, PathError>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("linear_scan", widest_path_linear_scan),
    ("indexed_heap", widest_path_indexed_heap),
    ("spanning_tree", widest_path_spanning_tree),
];

const UNIFORM_SIZES: [usize; 3] = [1_024, 4_096, 16_384];
const DEGREE_SIZES: [usize; 3] = [512, 1_024, 2_048];
const GRAPH_SEED: u64 = 0x5EED_2026;

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 1_024 {
        apply_small_runtime_config(group);
    } else if size <= 4_096 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn graph_for(policy: GenerationPolicy, size: usize) -> UndirectedGraph {
    let seed = GRAPH_SEED ^ ((size as u64) << 7) ^ policy as u64;
    generate_seeded(policy, size, seed).unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = default_rng();
    let cases = [
        (GenerationPolicy::UniformEdges, UNIFORM_SIZES),
        (GenerationPolicy::DegreeTargeted, DEGREE_SIZES),
    ];

    for (policy, sizes) in cases {
        let mut group = c.benchmark_group(format!("widest_path/{}", policy.label()));

        for &size in &sizes {
            apply_runtime_config_for_size(&mut group, size);
            let graph = graph_for(policy, size);
            let (source, sink) = distinct_endpoints(&mut rng, size);

            for (name, strategy) in STRATEGIES {
                group.bench_function(BenchmarkId::new(name, size), |bencher| {
                    bencher.iter(|| {
                        let found = strategy(&graph, black_box(source), black_box(sink)).unwrap();
                        black_box(found);
                    });
                });
            }
        }

        group.finish();
    }
}

fn bench_tree_reuse(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("widest_path/tree_reuse");

    for &size in &UNIFORM_SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let graph = graph_for(GenerationPolicy::UniformEdges, size);
        let tree = MaximumSpanningTree::build(&graph);
        let (source, sink) = distinct_endpoints(&mut rng, size);

        group.bench_function(BenchmarkId::new("prebuilt_query", size), |bencher| {
            bencher.iter(|| {
                let found = tree
                    .widest_path(black_box(source), black_box(sink))
                    .unwrap();
                black_box(found);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_tree_reuse);
criterion_main!(benches);
