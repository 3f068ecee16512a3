use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, Path, Weight};

/// Work budget for the enumerating searches.
///
/// Simple-path enumeration is exponential on dense graphs; a cap is the only
/// way to bound it. When a cap cuts a search short the result carries
/// `truncated = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkCap {
    /// Stop after this many results (recorded paths, or candidate paths
    /// examined by [`longest_path`]).
    Results(NonZeroUsize),
    /// Stop after this many frontier dequeues.
    Expansions(NonZeroUsize),
}

impl WorkCap {
    pub fn results(limit: i64) -> Result<Self> {
        positive(limit).map(WorkCap::Results)
    }

    pub fn expansions(limit: i64) -> Result<Self> {
        positive(limit).map(WorkCap::Expansions)
    }
}

fn positive(limit: i64) -> Result<NonZeroUsize> {
    if limit <= 0 {
        return Err(GraphError::InvalidPathCap(limit));
    }
    let limit_usize = usize::try_from(limit).unwrap_or(usize::MAX);
    NonZeroUsize::new(limit_usize).ok_or(GraphError::InvalidPathCap(limit))
}

/// Counts work against an optional [`WorkCap`].
struct Budget {
    cap: Option<WorkCap>,
    expansions: usize,
    results: usize,
}

impl Budget {
    fn new(cap: Option<WorkCap>) -> Self {
        Self {
            cap,
            expansions: 0,
            results: 0,
        }
    }

    /// Record a dequeue. False once the expansion cap is spent.
    fn try_expand(&mut self) -> bool {
        if let Some(WorkCap::Expansions(limit)) = self.cap {
            if self.expansions >= limit.get() {
                return false;
            }
        }
        self.expansions += 1;
        true
    }

    /// Record a result. False once the result cap is spent.
    fn try_result(&mut self) -> bool {
        if let Some(WorkCap::Results(limit)) = self.cap {
            if self.results >= limit.get() {
                return false;
            }
        }
        self.results += 1;
        true
    }

    fn results_exhausted(&self) -> bool {
        matches!(self.cap, Some(WorkCap::Results(limit)) if self.results >= limit.get())
    }
}

/// Every simple path between two nodes, shortest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSet {
    pub paths: Vec<Path>,
    /// A work cap stopped the search while unexplored branches remained.
    pub truncated: bool,
}

/// Longest simple path found from a start node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestPath {
    pub path: Path,
    pub weight: Weight,
    pub truncated: bool,
}

fn require<'g>(graph: &'g Graph, node: &str) -> Result<&'g str> {
    graph
        .adjacency()
        .get_key_value(node)
        .map(|(k, _)| k.as_str())
        .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
}

/// Shortest path from `start` to `end` by hop count (BFS).
///
/// Edge weights play no part in choosing the path. Among paths with equal hop
/// count, the one found first under neighbor insertion order wins.
///
/// Returns `Ok(None)` if `end` is not reachable from `start`.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Option<Path>> {
    let start = require(graph, start)?;
    let end = require(graph, end)?;

    if start == end {
        return Ok(Some(vec![start.to_string()]));
    }

    // Parent pointers instead of per-entry path clones; the start node is its
    // own parent.
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Ok(Some(reconstruct(&parents, start, end)));
        }

        for neighbor in graph.adjacency()[current].keys() {
            let neighbor = neighbor.as_str();
            if !parents.contains_key(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(None)
}

fn reconstruct(parents: &HashMap<&str, &str>, start: &str, end: &str) -> Path {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        current = parents[current];
        path.push(current.to_string());
    }
    path.reverse();
    path
}

/// Hop distance from `start` to every node reachable from it, `start`
/// included at distance 0, in BFS discovery order.
pub fn hop_distances<'g>(graph: &'g Graph, start: &str) -> Result<IndexMap<&'g str, usize>> {
    let start = require(graph, start)?;

    let mut distances: IndexMap<&str, usize> = IndexMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = distances[current];
        for neighbor in graph.adjacency()[current].keys() {
            let neighbor = neighbor.as_str();
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor, depth + 1);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(distances)
}

/// All simple paths from `start` to `end`, in non-decreasing hop count.
///
/// Visited state is per path, so a node may appear on many candidate paths
/// but never twice on one. A path is not extended past `end`.
///
/// The number of paths can be exponential in the node count; pass a `cap` to
/// bound the work. No path at all is an empty, untruncated set.
pub fn all_simple_paths(
    graph: &Graph,
    start: &str,
    end: &str,
    cap: Option<WorkCap>,
) -> Result<PathSet> {
    let start = require(graph, start)?;
    let end = require(graph, end)?;

    let mut budget = Budget::new(cap);
    let mut paths: Vec<Path> = Vec::new();
    let mut truncated = false;
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    queue.push_back(vec![start]);

    while !queue.is_empty() {
        if !budget.try_expand() {
            truncated = true;
            break;
        }
        let Some(path) = queue.pop_front() else {
            break;
        };
        let current = path[path.len() - 1];

        if current == end {
            if budget.try_result() {
                paths.push(path.iter().map(|n| n.to_string()).collect());
            }
            if budget.results_exhausted() && !queue.is_empty() {
                truncated = true;
                break;
            }
            continue;
        }

        for neighbor in graph.adjacency()[current].keys() {
            let neighbor = neighbor.as_str();
            if !path.contains(&neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor);
                queue.push_back(extended);
            }
        }
    }

    if truncated {
        warn!(start, end, found = paths.len(), "simple path enumeration truncated by cap");
    } else {
        debug!(start, end, found = paths.len(), "simple path enumeration complete");
    }

    Ok(PathSet { paths, truncated })
}

/// Longest simple path (by node count) starting at `start`.
///
/// Explores every simple path breadth-first. A candidate replaces the best
/// only with strictly more nodes, so the first path found at the winning
/// length is kept. An isolated start yields `[start]` with weight 0.
pub fn longest_path(graph: &Graph, start: &str, cap: Option<WorkCap>) -> Result<LongestPath> {
    let start = require(graph, start)?;

    let mut budget = Budget::new(cap);
    let mut best: Vec<&str> = vec![start];
    let mut best_weight: Weight = 0.0;
    let mut truncated = false;
    let mut queue: VecDeque<(Vec<&str>, Weight)> = VecDeque::new();
    queue.push_back((vec![start], 0.0));

    'search: while !queue.is_empty() {
        if !budget.try_expand() {
            truncated = true;
            break;
        }
        let Some((path, weight)) = queue.pop_front() else {
            break;
        };
        let current = path[path.len() - 1];

        for (neighbor, &edge_weight) in &graph.adjacency()[current] {
            let neighbor = neighbor.as_str();
            if path.contains(&neighbor) {
                continue;
            }
            if !budget.try_result() {
                truncated = true;
                break 'search;
            }

            let mut extended = path.clone();
            extended.push(neighbor);
            let extended_weight = weight + edge_weight;

            if extended.len() > best.len() {
                best = extended.clone();
                best_weight = extended_weight;
            }
            queue.push_back((extended, extended_weight));
        }
    }

    if truncated {
        warn!(start, best_len = best.len(), "longest path search truncated by cap");
    }

    Ok(LongestPath {
        path: best.into_iter().map(str::to_string).collect(),
        weight: best_weight,
        truncated,
    })
}

/// Nodes reachable from `start` within `hops` edges, `start` excluded.
///
/// Each round expands only the nodes discovered in the previous round, so
/// every node is expanded at most once. The set iterates in discovery order.
pub fn reachable_within_hops(graph: &Graph, start: &str, hops: i64) -> Result<IndexSet<NodeId>> {
    let start = require(graph, start)?;
    if hops < 0 {
        return Err(GraphError::InvalidHopCount(hops));
    }

    let mut found: IndexSet<NodeId> = IndexSet::new();
    let mut frontier: Vec<&str> = vec![start];

    for _ in 0..hops {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for node in frontier {
            for neighbor in graph.adjacency()[node].keys() {
                if neighbor != start && found.insert(neighbor.clone()) {
                    next.push(neighbor.as_str());
                }
            }
        }
        frontier = next;
    }

    Ok(found)
}
