//! campus-graph-core: in-memory analysis of a weighted campus map.
//!
//! Buildings are nodes, walkways are undirected weighted edges. A [`Graph`]
//! is built once from an edge list and then queried read-only: hop-count
//! shortest paths, path distances, simple-path enumeration, longest paths,
//! bounded-hop reachability, the graph center and the mean edge weight.
//!
//! The crate does no I/O. Topology generation, rendering and presentation
//! live in the `campus-graph` binary.

mod centrality;
mod error;
mod graph;
mod metrics;
mod traversal;

pub use centrality::{center, eccentricities, eccentricity};
pub use error::{GraphError, Result};
pub use graph::{build_graph, Adjacency, EdgeRecord, EdgeRef, Graph, NodeId, Path, Weight};
pub use metrics::{average_edge_weight, path_weight};
pub use traversal::{
    all_simple_paths, hop_distances, longest_path, reachable_within_hops, shortest_path,
    LongestPath, PathSet, WorkCap,
};
