use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::MAX_WEIGHT;
use crate::error::GenerationError;
use crate::graph::{Edge, UndirectedGraph, insert_edge};

/// Attempts the degree-targeted policy makes before giving up on its
/// target vector.
pub const DEFAULT_RETRY_LIMIT: usize = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GenerationPolicy {
    /// Uniformly sampled vertex pairs until the graph has 3n distinct edges.
    UniformEdges,
    /// Per-vertex degree targets drawn from a window around n / 5.
    DegreeTargeted,
}

impl GenerationPolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::UniformEdges => "uniform_edges",
            Self::DegreeTargeted => "degree_targeted",
        }
    }

    /// Smallest accepted vertex count. The cycle needs three distinct
    /// vertices; 3n distinct edges need n(n - 1) / 2 >= 3n, so n >= 7.
    pub fn minimum_vertices(self) -> usize {
        match self {
            Self::UniformEdges => 7,
            Self::DegreeTargeted => 3,
        }
    }
}

/// Generates a graph from a fixed seed.
pub fn generate_seeded(
    policy: GenerationPolicy,
    vertex_count: usize,
    seed: u64,
) -> Result<UndirectedGraph, GenerationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(policy, vertex_count, &mut rng)
}

/// Generates a graph with [`DEFAULT_RETRY_LIMIT`] attempts for the
/// degree-targeted policy.
pub fn generate<R: Rng + ?Sized>(
    policy: GenerationPolicy,
    vertex_count: usize,
    rng: &mut R,
) -> Result<UndirectedGraph, GenerationError> {
    generate_with_retry_limit(policy, vertex_count, DEFAULT_RETRY_LIMIT, rng)
}

pub fn generate_with_retry_limit<R: Rng + ?Sized>(
    policy: GenerationPolicy,
    vertex_count: usize,
    retry_limit: usize,
    rng: &mut R,
) -> Result<UndirectedGraph, GenerationError> {
    let minimum = policy.minimum_vertices();
    if vertex_count < minimum {
        return Err(GenerationError::TooFewVertices {
            vertices: vertex_count,
            minimum,
            policy: policy.label(),
        });
    }

    match policy {
        GenerationPolicy::UniformEdges => Ok(uniform_edges(vertex_count, rng)),
        GenerationPolicy::DegreeTargeted => degree_targeted(vertex_count, retry_limit, rng),
    }
}

fn uniform_edges<R: Rng + ?Sized>(n: usize, rng: &mut R) -> UndirectedGraph {
    let target = n * 3;
    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); n];
    let mut dedup = BTreeMap::new();
    embed_cycle(&mut adjacency, &mut dedup, rng);

    while dedup.len() < target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        insert_edge(&mut adjacency, &mut dedup, u, v, random_weight(rng));
    }

    UndirectedGraph::from_parts(adjacency, dedup)
}

fn degree_targeted<R: Rng + ?Sized>(
    n: usize,
    retry_limit: usize,
    rng: &mut R,
) -> Result<UndirectedGraph, GenerationError> {
    let fifth = n / 5;
    let lo = fifth.saturating_sub(50);
    let hi = fifth + 50;

    for _ in 0..retry_limit {
        if let Some(graph) = degree_targeted_attempt(n, lo, hi, rng) {
            return Ok(graph);
        }
    }

    Err(GenerationError::Infeasible {
        attempts: retry_limit,
    })
}

/// One full attempt: fresh cycle, fresh targets, shuffled fill rounds.
/// `None` when some vertex cannot reach its target without pushing a
/// partner past `hi`.
fn degree_targeted_attempt<R: Rng + ?Sized>(
    n: usize,
    lo: usize,
    hi: usize,
    rng: &mut R,
) -> Option<UndirectedGraph> {
    let mut adjacency: Vec<Vec<Edge>> = (0..n).map(|_| Vec::with_capacity(n / 5)).collect();
    let mut dedup = BTreeMap::new();
    embed_cycle(&mut adjacency, &mut dedup, rng);

    let targets: Vec<usize> = (0..n).map(|_| rng.random_range(lo..=hi)).collect();
    let mut permutation: Vec<usize> = (0..n).collect();

    loop {
        permutation.shuffle(rng);
        let Some(flag) = permutation
            .iter()
            .position(|&v| adjacency[v].len() < targets[v])
        else {
            return Some(UndirectedGraph::from_parts(adjacency, dedup));
        };

        // Top the deficient vertex up from the rest of the permutation.
        // Once satisfied it stays satisfied, so this loops at most n times.
        let u = permutation[flag];
        for j in 1..n {
            if adjacency[u].len() >= targets[u] {
                break;
            }
            let v = permutation[(flag + j) % n];
            if adjacency[v].len() < hi {
                insert_edge(&mut adjacency, &mut dedup, u, v, random_weight(rng));
            }
        }
        if adjacency[u].len() < targets[u] {
            return None;
        }
    }
}

/// Threads a weighted cycle through all vertices in shuffled order, so every
/// generated graph starts out connected.
fn embed_cycle<R: Rng + ?Sized>(
    adjacency: &mut [Vec<Edge>],
    dedup: &mut BTreeMap<(u32, u32), u64>,
    rng: &mut R,
) {
    let n = adjacency.len();
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);

    for i in 0..n {
        let u = permutation[i];
        let v = permutation[(i + 1) % n];
        insert_edge(adjacency, dedup, u, v, random_weight(rng));
    }
}

#[inline]
fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.random_range(1..=MAX_WEIGHT)
}
