use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use crate::traversal::hop_distances;

/// Largest hop distance from `node` to any node reachable from it.
///
/// Unreachable nodes are left out, so an isolated node has eccentricity 0.
pub fn eccentricity(graph: &Graph, node: &str) -> Result<usize> {
    let distances = hop_distances(graph, node)?;
    Ok(distances.values().copied().max().unwrap_or(0))
}

/// Eccentricity of every node, in node order.
///
/// One BFS per node: O(V·(V+E)).
pub fn eccentricities(graph: &Graph) -> Result<Vec<(NodeId, usize)>> {
    graph
        .nodes()
        .map(|node| eccentricity(graph, node).map(|e| (node.to_string(), e)))
        .collect()
}

/// The node with the smallest eccentricity.
///
/// Nodes are scanned in insertion order and only a strictly smaller
/// eccentricity replaces the current best. On a disconnected graph the
/// eccentricity only measures a node's own component, so a node in a small
/// component (or an isolated one) can come out as the center.
///
/// One BFS per node: O(V·(V+E)).
pub fn center(graph: &Graph) -> Result<NodeId> {
    let mut best: Option<(&str, usize)> = None;

    for node in graph.nodes() {
        let ecc = eccentricity(graph, node)?;
        match best {
            Some((_, best_ecc)) if ecc >= best_ecc => {}
            _ => best = Some((node, ecc)),
        }
    }

    let (node, ecc) = best.ok_or(GraphError::EmptyGraph)?;
    debug!(center = node, eccentricity = ecc, "computed graph center");
    Ok(node.to_string())
}
