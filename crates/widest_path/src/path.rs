use std::collections::VecDeque;

use crate::WIDTH_INF;
use crate::error::PathError;
use crate::graph::Edge;

/// Answer to a widest-path query: the s-to-t vertex sequence and the minimum
/// edge weight along it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BottleneckPath {
    pub path: Vec<u32>,
    pub bottleneck: u64,
}

/// Per-vertex state of a label-correcting search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Unvisited,
    Fringe,
    Settled,
}

pub(crate) const NO_PREDECESSOR: u32 = u32::MAX;

pub(crate) fn check_endpoints(
    vertex_count: usize,
    source: usize,
    sink: usize,
) -> Result<(), PathError> {
    for vertex in [source, sink] {
        if vertex >= vertex_count {
            return Err(PathError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// The `s == t` query: a single-vertex path of unbounded width.
pub(crate) fn degenerate_path(vertex: usize) -> BottleneckPath {
    BottleneckPath {
        path: vec![vertex as u32],
        bottleneck: WIDTH_INF,
    }
}

/// Walk `sink → predecessor[sink] → …` back to the source and reverse.
/// Gives up after `predecessor.len()` hops; a longer walk means the chain
/// never reaches the source (unvisited sink or disconnected endpoints).
pub(crate) fn retrace(
    predecessor: &[u32],
    source: usize,
    sink: usize,
) -> Result<Vec<u32>, PathError> {
    let mut path = Vec::new();
    let mut cursor = sink;
    for _ in 0..predecessor.len() {
        path.push(cursor as u32);
        if cursor == source {
            path.reverse();
            return Ok(path);
        }
        let dad = predecessor[cursor];
        if dad == NO_PREDECESSOR {
            break;
        }
        cursor = dad as usize;
    }
    Err(PathError::NoPath {
        from: source,
        to: sink,
    })
}

/// Breadth-first walk over tree edges from `source`, recording predecessors
/// and the running minimum edge weight seen; stops once `sink` is dequeued.
pub(crate) fn tree_bfs(adjacency: &[Vec<Edge>], source: usize, sink: usize) -> (Vec<u32>, Vec<u64>) {
    let n = adjacency.len();
    let mut predecessor = vec![NO_PREDECESSOR; n];
    let mut width = vec![0_u64; n];
    let mut queue = VecDeque::new();

    predecessor[source] = source as u32;
    width[source] = WIDTH_INF;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        if u == sink {
            break;
        }
        for edge in &adjacency[u] {
            let v = edge.to as usize;
            if predecessor[v] == NO_PREDECESSOR {
                predecessor[v] = u as u32;
                width[v] = width[u].min(edge.weight);
                queue.push_back(v);
            }
        }
    }

    (predecessor, width)
}
