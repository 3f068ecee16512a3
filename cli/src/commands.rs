use anyhow::Result;
use campus_graph_core::{
    all_simple_paths, average_edge_weight, center, eccentricities, longest_path, path_weight,
    reachable_within_hops, shortest_path, Graph, NodeId, WorkCap,
};
use clap::Subcommand;

use crate::config::Settings;
use crate::output::Printer;
use crate::render;

/// Queries against the loaded campus. Shared by the command line and the
/// interactive menu.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Query {
    /// Fewest-hops path between two buildings
    Shortest { from: String, to: String },
    /// Total distance along a path
    Distance {
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },
    /// Every simple path between two buildings
    Paths {
        from: String,
        to: String,
        /// Stop after this many frontier expansions
        #[arg(long, allow_negative_numbers = true)]
        cap: Option<i64>,
        /// Stop after this many paths
        #[arg(long, allow_negative_numbers = true, conflicts_with = "cap")]
        max_paths: Option<i64>,
    },
    /// Longest simple path from a building
    Longest {
        from: String,
        /// Stop after this many frontier expansions
        #[arg(long, allow_negative_numbers = true)]
        cap: Option<i64>,
    },
    /// Buildings reachable within a number of hops
    Reach {
        from: String,
        #[arg(allow_negative_numbers = true)]
        hops: i64,
    },
    /// Building with the smallest eccentricity
    Center {
        /// Also list every building's eccentricity and degree
        #[arg(long)]
        all: bool,
    },
    /// Mean walkway distance
    Average,
    /// List every walkway
    Edges,
    /// Graphviz DOT diagram of the campus
    Dot,
}

/// Explicit cap from the command, else the configured default.
fn resolve_cap(
    expansions: Option<i64>,
    results: Option<i64>,
    settings: &Settings,
) -> Result<Option<WorkCap>> {
    let cap = match (expansions, results) {
        (_, Some(limit)) => Some(WorkCap::results(limit)?),
        (Some(limit), None) => Some(WorkCap::expansions(limit)?),
        (None, None) if settings.path_cap > 0 => Some(WorkCap::expansions(settings.path_cap)?),
        (None, None) => None,
    };
    Ok(cap)
}

/// Run one query and render its result.
pub fn execute(
    graph: &Graph,
    query: &Query,
    settings: &Settings,
    printer: &Printer,
) -> Result<String> {
    let out = match query {
        Query::Shortest { from, to } => {
            let path = shortest_path(graph, from, to)?;
            match path {
                Some(path) => {
                    let weight = path_weight(graph, &path)?;
                    printer.shortest(from, to, Some((path.as_slice(), weight)))
                }
                None => printer.shortest(from, to, None),
            }
        }
        Query::Distance { path } => {
            let weight = path_weight(graph, path)?;
            printer.distance(path, weight)
        }
        Query::Paths {
            from,
            to,
            cap,
            max_paths,
        } => {
            let cap = resolve_cap(*cap, *max_paths, settings)?;
            let set = all_simple_paths(graph, from, to, cap)?;
            let weights = set
                .paths
                .iter()
                .map(|p| path_weight(graph, p))
                .collect::<campus_graph_core::Result<Vec<_>>>()?;
            printer.paths(from, to, &set, &weights)
        }
        Query::Longest { from, cap } => {
            let cap = resolve_cap(*cap, None, settings)?;
            let longest = longest_path(graph, from, cap)?;
            printer.longest(from, &longest)
        }
        Query::Reach { from, hops } => {
            let nodes: Vec<NodeId> = reachable_within_hops(graph, from, *hops)?
                .into_iter()
                .collect();
            printer.reach(from, *hops, &nodes)
        }
        Query::Center { all } => {
            let node = center(graph)?;
            let table = eccentricities(graph)?;
            printer.center(graph, &node, &table, *all)
        }
        Query::Average => printer.average(average_edge_weight(graph)?),
        Query::Edges => printer.edges(graph),
        Query::Dot => printer.dot(render::to_dot(graph)),
    };
    Ok(out)
}
