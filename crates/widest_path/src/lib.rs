mod heap_search;
mod indexed_heap;
mod linear_scan;
mod path;
mod spanning_tree;
mod union_find;
pub mod error;
pub mod generator;
pub mod graph;

pub use error::GenerationError;
pub use error::PathError;
pub use graph::Edge;
pub use graph::UndirectedGraph;
pub use heap_search::widest_path_indexed_heap;
pub use indexed_heap::IndexedMaxHeap;
pub use linear_scan::widest_path_linear_scan;
pub use path::BottleneckPath;
pub use spanning_tree::MaximumSpanningTree;
pub use spanning_tree::widest_path_spanning_tree;
pub use union_find::UnionFind;

/// Largest weight a generated edge can carry.
pub const MAX_WEIGHT: u64 = i32::MAX as u64;

/// Width of the degenerate source-equals-sink path and the seed width of a
/// search source. No real path is wider, since every edge stays within
/// [`MAX_WEIGHT`].
pub const WIDTH_INF: u64 = MAX_WEIGHT;
