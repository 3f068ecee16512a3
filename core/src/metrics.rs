use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, Weight};

/// Total distance along `path`: the sum of each consecutive edge weight.
///
/// A single-node path weighs 0. Every node must exist, and every consecutive
/// pair must be adjacent.
pub fn path_weight<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Result<Weight> {
    if path.is_empty() {
        return Err(GraphError::InvalidPath);
    }
    if let Some(missing) = path.iter().find(|n| !graph.contains(n.as_ref())) {
        return Err(GraphError::UnknownNode(missing.as_ref().to_string()));
    }

    let mut total = 0.0;
    for step in path.windows(2) {
        let (from, to) = (step[0].as_ref(), step[1].as_ref());
        total += graph
            .weight(from, to)
            .ok_or_else(|| GraphError::MissingEdgeInPath {
                from: NodeId::from(from),
                to: NodeId::from(to),
            })?;
    }
    Ok(total)
}

/// Mean weight over the graph's distinct undirected edges.
///
/// Each edge contributes once even though it is stored from both endpoints.
/// A graph with nodes but no edges averages 0.
pub fn average_edge_weight(graph: &Graph) -> Result<Weight> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let (sum, count) = graph
        .edges()
        .fold((0.0, 0usize), |(sum, count), e| (sum + e.weight, count + 1));

    if count == 0 {
        return Ok(0.0);
    }
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, EdgeRecord};

    fn triangle() -> Graph {
        build_graph([("A", "B", 10.0), ("B", "C", 20.0), ("A", "C", 50.0)]).unwrap()
    }

    #[test]
    fn test_path_weight_sums_edges() {
        let g = triangle();
        assert_eq!(path_weight(&g, &["A", "B", "C"]).unwrap(), 30.0);
        assert_eq!(path_weight(&g, &["C", "A", "B"]).unwrap(), 60.0);
    }

    #[test]
    fn test_path_weight_single_node() {
        let g = triangle();
        assert_eq!(path_weight(&g, &["B"]).unwrap(), 0.0);
    }

    #[test]
    fn test_path_weight_owned_path() {
        let g = triangle();
        let path: Vec<String> = vec!["A".into(), "C".into()];
        assert_eq!(path_weight(&g, &path).unwrap(), 50.0);
    }

    #[test]
    fn test_path_weight_empty_path() {
        let g = triangle();
        let empty: [&str; 0] = [];
        assert_eq!(path_weight(&g, &empty), Err(GraphError::InvalidPath));
    }

    #[test]
    fn test_path_weight_missing_edge() {
        let g = build_graph([("A", "B", 1.0), ("C", "D", 1.0)]).unwrap();
        assert_eq!(
            path_weight(&g, &["A", "B", "C"]),
            Err(GraphError::MissingEdgeInPath {
                from: "B".into(),
                to: "C".into()
            })
        );
    }

    #[test]
    fn test_path_weight_unknown_node() {
        let g = triangle();
        assert_eq!(
            path_weight(&g, &["A", "Z"]),
            Err(GraphError::UnknownNode("Z".into()))
        );
    }

    #[test]
    fn test_average_triangle() {
        let avg = average_edge_weight(&triangle()).unwrap();
        assert!((avg - 80.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_single_edge() {
        let g = build_graph([("A", "B", 7.5)]).unwrap();
        assert_eq!(average_edge_weight(&g).unwrap(), 7.5);
    }

    #[test]
    fn test_average_counts_duplicates_once() {
        let g = build_graph([("A", "B", 4.0), ("A", "B", 8.0), ("B", "C", 2.0)]).unwrap();
        assert_eq!(average_edge_weight(&g).unwrap(), 5.0);
    }

    #[test]
    fn test_average_with_self_loop() {
        let g = build_graph([("A", "A", 3.0), ("A", "B", 5.0)]).unwrap();
        assert_eq!(average_edge_weight(&g).unwrap(), 4.0);
    }

    #[test]
    fn test_average_empty_graph() {
        let g = build_graph(Vec::<EdgeRecord>::new()).unwrap();
        assert_eq!(average_edge_weight(&g), Err(GraphError::EmptyGraph));
    }
}
