use crate::WIDTH_INF;
use crate::error::PathError;
use crate::graph::UndirectedGraph;
use crate::path::{BottleneckPath, NO_PREDECESSOR, Status, check_endpoints, degenerate_path, retrace};

/// Returns the widest path from `source` to `sink` and its bottleneck width.
pub fn widest_path_linear_scan(
    graph: &UndirectedGraph,
    source: usize,
    sink: usize,
) -> Result<BottleneckPath, PathError> {
    check_endpoints(graph.vertex_count(), source, sink)?;
    if source == sink {
        return Ok(degenerate_path(source));
    }

    let n = graph.vertex_count();
    let mut status = vec![Status::Unvisited; n];
    let mut width = vec![0_u64; n];
    let mut predecessor = vec![NO_PREDECESSOR; n];

    status[source] = Status::Settled;
    width[source] = WIDTH_INF;
    predecessor[source] = source as u32;
    for edge in graph.neighbors(source) {
        let v = edge.to as usize;
        status[v] = Status::Fringe;
        width[v] = edge.weight;
        predecessor[v] = source as u32;
    }

    while let Some(u) = max_fringe(&status, &width) {
        status[u] = Status::Settled;
        for edge in graph.neighbors(u) {
            let v = edge.to as usize;
            let through = width[u].min(edge.weight);
            match status[v] {
                Status::Unvisited => {
                    status[v] = Status::Fringe;
                    width[v] = through;
                    predecessor[v] = u as u32;
                }
                Status::Fringe if through > width[v] => {
                    width[v] = through;
                    predecessor[v] = u as u32;
                }
                _ => {}
            }
        }
    }

    let path = retrace(&predecessor, source, sink)?;
    Ok(BottleneckPath {
        path,
        bottleneck: width[sink],
    })
}

/// First fringe vertex of maximum width, or `None` once the fringe is empty.
/// Fringe widths are at least 1, so the zero floor excludes nothing.
fn max_fringe(status: &[Status], width: &[u64]) -> Option<usize> {
    let mut best = None;
    let mut best_width = 0;
    for (vertex, state) in status.iter().enumerate() {
        if *state == Status::Fringe && width[vertex] > best_width {
            best = Some(vertex);
            best_width = width[vertex];
        }
    }
    best
}
