use crate::error::PathError;
use crate::graph::{Edge, UndirectedGraph};
use crate::indexed_heap::IndexedMaxHeap;
use crate::path::{BottleneckPath, check_endpoints, degenerate_path, retrace, tree_bfs};
use crate::union_find::UnionFind;

/// Maximum spanning tree (a forest when the graph is disconnected), stored
/// as its own adjacency lists.
#[derive(Clone, Debug)]
pub struct MaximumSpanningTree {
    adjacency: Vec<Vec<Edge>>,
}

impl MaximumSpanningTree {
    /// Kruskal over the sorted edge slots: a max-heap keyed by the weight
    /// array yields edges heaviest-first, union-find rejects the ones that
    /// would close a cycle. Stops as soon as n - 1 edges are in the tree.
    pub fn build(graph: &UndirectedGraph) -> Self {
        let n = graph.vertex_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut components = UnionFind::new(n);
        let mut remaining = IndexedMaxHeap::from_keys(graph.edge_weights());
        let mut accepted = 0;

        while let Some((slot, weight)) = remaining.extract_max() {
            let (u, v) = graph.edge_pairs()[slot];
            let root_u = components.find(u as usize);
            let root_v = components.find(v as usize);
            if root_u == root_v {
                continue;
            }
            components.union(root_u, root_v);
            adjacency[u as usize].push(Edge { to: v, weight });
            adjacency[v as usize].push(Edge { to: u, weight });
            accepted += 1;
            if accepted + 1 == n {
                break;
            }
        }

        Self { adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges kept in the tree; n - 1 exactly when the source graph
    /// is connected.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the widest path from `source` to `sink` along tree edges.
    pub fn widest_path(&self, source: usize, sink: usize) -> Result<BottleneckPath, PathError> {
        check_endpoints(self.adjacency.len(), source, sink)?;
        if source == sink {
            return Ok(degenerate_path(source));
        }

        let (predecessor, width) = tree_bfs(&self.adjacency, source, sink);
        let path = retrace(&predecessor, source, sink)?;
        Ok(BottleneckPath {
            path,
            bottleneck: width[sink],
        })
    }
}

/// One-shot form with the same signature as the other strategies: builds the
/// tree and answers a single query.
pub fn widest_path_spanning_tree(
    graph: &UndirectedGraph,
    source: usize,
    sink: usize,
) -> Result<BottleneckPath, PathError> {
    MaximumSpanningTree::build(graph).widest_path(source, sink)
}
