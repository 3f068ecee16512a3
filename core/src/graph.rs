use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};

/// A building name. Nodes carry no attributes beyond identity.
pub type NodeId = String;

/// Distance between two adjacent buildings.
pub type Weight = f64;

/// Ordered, non-empty sequence of nodes, each consecutive pair adjacent.
pub type Path = Vec<NodeId>;

/// Neighbor → weight, in insertion order.
pub type Adjacency = IndexMap<NodeId, Weight>;

/// One undirected edge as supplied by a topology source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl<A, B> From<(A, B, Weight)> for EdgeRecord
where
    A: Into<NodeId>,
    B: Into<NodeId>,
{
    fn from((from, to, weight): (A, B, Weight)) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Borrowed view of a stored undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: Weight,
}

/// Undirected weighted graph: node → (neighbor → weight).
///
/// Edges are stored symmetrically, `adjacency[a][b] == adjacency[b][a]`.
/// Both levels keep insertion order, which is the iteration order every
/// traversal uses, so query results are deterministic for a given edge list.
/// There is no mutation API once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: IndexMap<NodeId, Adjacency>,
}

impl Graph {
    /// Build a graph from an edge list.
    ///
    /// A repeated pair overwrites the earlier weight in both directions and
    /// keeps its original neighbor position. Self-loops are stored as a single
    /// self-referencing entry.
    pub fn from_edges<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        let edges = edges.into_iter();
        let mut graph = Self {
            adjacency: IndexMap::with_capacity(edges.size_hint().0),
        };

        for record in edges {
            let EdgeRecord { from, to, weight } = record.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidWeight { from, to, weight });
            }
            graph.insert_edge(from, to, weight);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight);
        self.adjacency.entry(to).or_default().insert(from, weight);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Adjacent nodes and their weights.
    pub fn neighbors(&self, node: &str) -> Result<&Adjacency> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    /// Weight of the edge between `a` and `b`, if there is one.
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    pub fn degree(&self, node: &str) -> Result<usize> {
        self.neighbors(node).map(|n| n.len())
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|k| k.as_str())
    }

    /// Every undirected edge exactly once, ordered by its first endpoint.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(idx, (from, neighbors))| {
                neighbors.iter().filter_map(move |(to, &weight)| {
                    let to_idx = self.adjacency.get_index_of(to)?;
                    (to_idx >= idx).then_some(EdgeRef {
                        from: from.as_str(),
                        to: to.as_str(),
                        weight,
                    })
                })
            })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub(crate) fn adjacency(&self) -> &IndexMap<NodeId, Adjacency> {
        &self.adjacency
    }
}

/// Build a graph from `(node, node, weight)` triplets or [`EdgeRecord`]s.
pub fn build_graph<I, E>(edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = E>,
    E: Into<EdgeRecord>,
{
    Graph::from_edges(edges)
}
