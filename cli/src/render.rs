use campus_graph_core::Graph;

use crate::output::format_weight;

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Graphviz DOT for the whole campus, each walkway drawn once.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::from("graph campus {\n");
    for node in graph.nodes() {
        out.push_str(&format!("    {};\n", quote(node)));
    }
    for edge in graph.edges() {
        out.push_str(&format!(
            "    {} -- {} [label=\"{}\"];\n",
            quote(edge.from),
            quote(edge.to),
            format_weight(edge.weight)
        ));
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_graph_core::build_graph;

    #[test]
    fn test_dot_lists_nodes_and_edges_once() {
        let g = build_graph([("A", "B", 10.0), ("B", "C", 2.5)]).unwrap();
        let dot = to_dot(&g);
        assert!(dot.starts_with("graph campus {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches(" -- ").count(), 2);
        assert!(dot.contains("    \"A\" -- \"B\" [label=\"10\"];\n"));
        assert!(dot.contains("    \"B\" -- \"C\" [label=\"2.5\"];\n"));
        assert!(dot.contains("    \"C\";\n"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let g = build_graph([("Hall \"North\"", "Gym", 1.0)]).unwrap();
        assert!(to_dot(&g).contains("\"Hall \\\"North\\\"\""));
    }
}
