//! Text and JSON presentation of query results.

use campus_graph_core::{Graph, LongestPath, NodeId, PathSet, Weight};
use serde_json::json;
use yansi::Paint;

/// Whole distances print without a fractional part, others in their
/// shortest exact form.
pub fn format_weight(weight: Weight) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{:.0}", weight)
    } else {
        format!("{}", weight)
    }
}

/// Means are rounded to two decimals.
fn format_mean(mean: Weight) -> String {
    if mean.fract() == 0.0 {
        format_weight(mean)
    } else {
        format!("{:.2}", mean)
    }
}

fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|node| node.cyan().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn hops(path: &[NodeId]) -> usize {
    path.len().saturating_sub(1)
}

fn truncated_note() -> String {
    "(search stopped by the work cap; results may be incomplete)"
        .yellow()
        .to_string()
}

pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn shortest(&self, from: &str, to: &str, found: Option<(&[NodeId], Weight)>) -> String {
        if self.json {
            let value = match found {
                Some((path, weight)) => {
                    json!({ "path": path, "hops": hops(path), "distance": weight })
                }
                None => json!({ "path": null }),
            };
            return format!("{:#}", value);
        }
        match found {
            Some((path, weight)) => format!(
                "Shortest path ({} hops, distance {}): {}",
                hops(path).bold(),
                format_weight(weight).yellow(),
                format_path(path)
            ),
            None => format!("No path from {} to {}", from.cyan(), to.cyan()),
        }
    }

    pub fn distance(&self, path: &[NodeId], weight: Weight) -> String {
        if self.json {
            return format!("{:#}", json!({ "path": path, "distance": weight }));
        }
        format!(
            "Distance along {}: {}",
            format_path(path),
            format_weight(weight).yellow()
        )
    }

    pub fn paths(&self, from: &str, to: &str, set: &PathSet, weights: &[Weight]) -> String {
        if self.json {
            let paths: Vec<_> = set
                .paths
                .iter()
                .zip(weights)
                .map(|(path, weight)| {
                    json!({ "path": path, "hops": hops(path), "distance": weight })
                })
                .collect();
            return format!("{:#}", json!({ "paths": paths, "truncated": set.truncated }));
        }
        let mut lines = vec![format!(
            "{} simple paths from {} to {}",
            set.paths.len().bold(),
            from.cyan(),
            to.cyan()
        )];
        for (i, (path, weight)) in set.paths.iter().zip(weights).enumerate() {
            lines.push(format!(
                "  {:>3}. {} ({} hops, distance {})",
                i + 1,
                format_path(path),
                hops(path),
                format_weight(*weight).yellow()
            ));
        }
        if set.truncated {
            lines.push(truncated_note());
        }
        lines.join("\n")
    }

    pub fn longest(&self, start: &str, longest: &LongestPath) -> String {
        if self.json {
            return format!("{:#}", json!(longest));
        }
        let mut out = format!(
            "Longest path from {} ({} nodes, distance {}): {}",
            start.cyan(),
            longest.path.len().bold(),
            format_weight(longest.weight).yellow(),
            format_path(&longest.path)
        );
        if longest.truncated {
            out.push('\n');
            out.push_str(&truncated_note());
        }
        out
    }

    pub fn reach(&self, start: &str, hops: i64, nodes: &[NodeId]) -> String {
        if self.json {
            return format!("{:#}", json!({ "start": start, "hops": hops, "nodes": nodes }));
        }
        let listed = nodes
            .iter()
            .map(|n| n.cyan().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} buildings within {} hops of {}: {}",
            nodes.len().bold(),
            hops,
            start.cyan(),
            if listed.is_empty() { "-".to_string() } else { listed }
        )
    }

    /// With `show_all`, every building's eccentricity and degree follow.
    pub fn center(
        &self,
        graph: &Graph,
        node: &str,
        table: &[(NodeId, usize)],
        show_all: bool,
    ) -> String {
        let ecc = table
            .iter()
            .find(|(n, _)| n == node)
            .map(|(_, e)| *e)
            .unwrap_or(0);
        if self.json {
            let mut value = json!({ "center": node, "eccentricity": ecc });
            if show_all {
                let rows: Vec<_> = table
                    .iter()
                    .map(|(n, e)| {
                        json!({
                            "node": n,
                            "eccentricity": e,
                            "degree": graph.degree(n).unwrap_or(0),
                        })
                    })
                    .collect();
                value["eccentricities"] = json!(rows);
            }
            return format!("{:#}", value);
        }
        let mut lines = vec![format!(
            "Center: {} (eccentricity {})",
            node.cyan().bold(),
            ecc.bold()
        )];
        if show_all {
            lines.push(format!("  {:<24} {:>12} {:>6}", "building", "eccentricity", "degree"));
            for (n, e) in table {
                let degree = graph.degree(n).unwrap_or(0);
                lines.push(format!("  {:<24} {:>12} {:>6}", n, e, degree));
            }
        }
        lines.join("\n")
    }

    pub fn average(&self, average: Weight) -> String {
        if self.json {
            return format!("{:#}", json!({ "average_edge_weight": average }));
        }
        format!("Average edge weight: {}", format_mean(average).yellow())
    }

    pub fn edges(&self, graph: &Graph) -> String {
        if self.json {
            let edges: Vec<_> = graph
                .edges()
                .map(|e| json!({ "from": e.from, "to": e.to, "weight": e.weight }))
                .collect();
            return format!("{:#}", json!(edges));
        }
        let mut lines = vec![format!(
            "{} buildings, {} walkways",
            graph.node_count().bold(),
            graph.edge_count().bold()
        )];
        for e in graph.edges() {
            lines.push(format!(
                "  {} -- {} ({})",
                e.from.cyan(),
                e.to.cyan(),
                format_weight(e.weight).yellow()
            ));
        }
        lines.join("\n")
    }

    pub fn dot(&self, dot: String) -> String {
        if self.json {
            return format!("{:#}", json!({ "dot": dot }));
        }
        dot
    }
}

/// Error with its context chain, for stderr or the menu.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{} {:#}", "error:".red().bold(), err)
}
