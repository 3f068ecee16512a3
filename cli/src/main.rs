//! campus-graph: explore a campus map from the command line.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use campus_graph_core::{build_graph, Graph};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod menu;
mod output;
mod render;
mod topology;

use commands::Query;
use config::Settings;
use output::{format_error, Printer};

#[derive(Parser)]
#[command(name = "campus-graph", version)]
#[command(
    about = "Shortest paths, reachability and centrality over a campus map",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML settings file
    #[arg(short, long, global = true, env = "CAMPUS_GRAPH_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON edge list to load
    #[arg(long, global = true, value_name = "FILE")]
    edges: Option<PathBuf>,

    /// Use a randomly generated campus
    #[arg(long, global = true)]
    random: bool,

    /// Building count for --random
    #[arg(long, global = true)]
    buildings: Option<usize>,

    /// Seed for --random
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Default expansion cap for path enumeration (0 = unbounded)
    #[arg(long, global = true)]
    path_cap: Option<i64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Query(Query),
    /// Interactive query menu
    Menu,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(path) = &self.edges {
            settings.edges_file = Some(path.clone());
        }
        if self.random {
            settings.random = true;
        }
        if let Some(buildings) = self.buildings {
            settings.buildings = buildings;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(cap) = self.path_cap {
            settings.path_cap = cap;
        }
        if self.no_color {
            settings.color = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn load_graph(settings: &Settings) -> Result<Graph> {
    let (edges, source) = if let Some(path) = &settings.edges_file {
        (topology::load_edge_file(path)?, path.display().to_string())
    } else if settings.random {
        (
            topology::random_campus(settings.buildings, settings.seed),
            format!("random campus (seed {})", settings.seed),
        )
    } else {
        (topology::sample_campus(), "sample campus".to_string())
    };

    let graph =
        build_graph(edges).with_context(|| format!("failed to build graph from {}", source))?;
    info!(
        source = %source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "campus loaded"
    );
    Ok(graph)
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    if !settings.color || !std::io::stdout().is_terminal() {
        yansi::disable();
    }

    let graph = load_graph(&settings)?;
    let printer = Printer::new(cli.json);

    match &cli.command {
        Commands::Query(query) => {
            println!("{}", commands::execute(&graph, query, &settings, &printer)?);
        }
        Commands::Menu => {
            let stdin = std::io::stdin();
            menu::run(&graph, &settings, &printer, stdin.lock(), &mut std::io::stdout())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "campus_graph={},campus_graph_core={}",
            log_level, log_level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query_with_global_flags() {
        let cli = Cli::try_parse_from([
            "campus-graph",
            "paths",
            "A",
            "B",
            "--max-paths",
            "3",
            "--random",
            "--seed",
            "9",
        ])
        .unwrap();
        assert!(cli.random);
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Commands::Query(Query::Paths { max_paths, cap, .. }) => {
                assert_eq!(max_paths, Some(3));
                assert_eq!(cap, None);
            }
            _ => panic!("expected paths query"),
        }
    }

    #[test]
    fn test_cap_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "campus-graph",
            "paths",
            "A",
            "B",
            "--cap",
            "2",
            "--max-paths",
            "3",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_overrides_are_validated() {
        let cli = Cli::try_parse_from(["campus-graph", "center", "--buildings", "40"]).unwrap();
        assert!(cli.settings().is_err());
    }

    #[test]
    fn test_flag_overrides_out_of_range_config_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "buildings = 40").unwrap();
        let config = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "campus-graph",
            "center",
            "--config",
            config,
            "--buildings",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.settings().unwrap().buildings, 10);

        let cli = Cli::try_parse_from(["campus-graph", "center", "--config", config]).unwrap();
        assert!(cli.settings().is_err());
    }

    #[test]
    fn test_load_random_graph() {
        let settings = Settings {
            random: true,
            buildings: 12,
            seed: 5,
            ..Settings::default()
        };
        let graph = load_graph(&settings).unwrap();
        assert_eq!(graph.node_count(), 12);
    }

    #[test]
    fn test_load_sample_graph_by_default() {
        let graph = load_graph(&Settings::default()).unwrap();
        assert!(graph.contains("Faculty_CS"));
    }
}
