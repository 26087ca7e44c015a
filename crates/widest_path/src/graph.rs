use std::collections::BTreeMap;

use crate::MAX_WEIGHT;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Vertex-degree summary, reported by the generators once a graph is complete.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

/// Weighted undirected graph over vertex ids `0..n`.
///
/// Adjacency is symmetric: inserting `(u, v, w)` records `v` in `u`'s list and
/// `u` in `v`'s list with the same weight. The deduplicated edge set is frozen
/// into a pair-sorted list at construction; re-inserting an existing pair is a
/// no-op. Immutable once built.
#[derive(Clone, Debug)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_pairs: Vec<(u32, u32)>,
    edge_weights: Vec<u64>,
}

impl UndirectedGraph {
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); vertex_count];
        let mut dedup = BTreeMap::new();

        for &(u, v, weight) in edges {
            assert!((u as usize) < vertex_count, "edge endpoint out of range");
            assert!((v as usize) < vertex_count, "edge endpoint out of range");
            assert!(u != v, "self-loops are not representable");
            assert!(
                (1..=MAX_WEIGHT).contains(&weight),
                "edge weight outside [1, MAX_WEIGHT]"
            );
            insert_edge(&mut adjacency, &mut dedup, u as usize, v as usize, weight);
        }

        Self::from_parts(adjacency, dedup)
    }

    pub(crate) fn from_parts(
        adjacency: Vec<Vec<Edge>>,
        dedup: BTreeMap<(u32, u32), u64>,
    ) -> Self {
        let mut edge_pairs = Vec::with_capacity(dedup.len());
        let mut edge_weights = Vec::with_capacity(dedup.len());
        for (pair, weight) in dedup {
            edge_pairs.push(pair);
            edge_weights.push(weight);
        }

        Self {
            adjacency,
            edge_pairs,
            edge_weights,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of deduplicated undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_pairs.len()
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Deduplicated edges as normalized `(u, v)` pairs with `u < v`, sorted.
    #[inline]
    pub fn edge_pairs(&self) -> &[(u32, u32)] {
        &self.edge_pairs
    }

    /// Weights parallel to [`edge_pairs`](Self::edge_pairs).
    #[inline]
    pub fn edge_weights(&self) -> &[u64] {
        &self.edge_weights
    }

    /// Weight of the edge between `u` and `v`, if present.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<u64> {
        let pair = (u.min(v) as u32, u.max(v) as u32);
        let slot = self.edge_pairs.binary_search(&pair).ok()?;
        Some(self.edge_weights[slot])
    }

    pub fn degree_stats(&self) -> DegreeStats {
        if self.adjacency.is_empty() {
            return DegreeStats {
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }

        let mut min = usize::MAX;
        let mut max = 0;
        let mut sum = 0;
        for list in &self.adjacency {
            let degree = list.len();
            min = min.min(degree);
            max = max.max(degree);
            sum += degree;
        }

        DegreeStats {
            min,
            max,
            mean: sum as f64 / self.adjacency.len() as f64,
        }
    }
}

/// Record `(u, v, weight)` in both adjacency lists unless the pair is a
/// self-loop or already present. Returns whether the edge was new.
pub(crate) fn insert_edge(
    adjacency: &mut [Vec<Edge>],
    dedup: &mut BTreeMap<(u32, u32), u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let pair = (u.min(v) as u32, u.max(v) as u32);
    if dedup.contains_key(&pair) {
        return false;
    }
    dedup.insert(pair, weight);
    adjacency[u].push(Edge {
        to: v as u32,
        weight,
    });
    adjacency[v].push(Edge {
        to: u as u32,
        weight,
    });
    true
}
