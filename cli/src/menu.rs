use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use campus_graph_core::Graph;
use clap::Parser;
use tracing::debug;
use yansi::Paint;

use crate::commands::{execute, Query};
use crate::config::Settings;
use crate::output::{format_error, Printer};

/// One line typed at the menu prompt.
#[derive(Parser)]
#[command(name = "campus>", no_binary_name = true)]
struct MenuLine {
    #[command(subcommand)]
    query: Query,
}

/// Interactive loop: read a query per line until `quit`, `exit` or end of
/// input. A failing query prints its error and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    graph: &Graph,
    settings: &Settings,
    printer: &Printer,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "{} buildings, {} walkways. Type {} for commands, {} to leave.",
        graph.node_count(),
        graph.edge_count(),
        "help".bold(),
        "quit".bold()
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "{} ", "campus>".green().bold())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("failed to read menu input")?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.first() {
            None => continue,
            Some(&"quit") | Some(&"exit") => break,
            Some(_) => {}
        }

        debug!(command = %line.trim(), "menu command");
        match MenuLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => match execute(graph, &parsed.query, settings, printer) {
                Ok(text) => writeln!(output, "{}", text)?,
                Err(err) => writeln!(output, "{}", format_error(&err))?,
            },
            Err(err) => write!(output, "{}", err.render())?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_graph_core::build_graph;

    fn session(script: &str) -> String {
        yansi::disable();
        let graph = build_graph([("A", "B", 10.0), ("B", "C", 20.0), ("A", "C", 50.0)]).unwrap();
        let mut output = Vec::new();
        run(
            &graph,
            &Settings::default(),
            &Printer::new(false),
            script.as_bytes(),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_runs_queries() {
        let out = session("shortest A C\n\naverage\nquit\n");
        assert!(out.starts_with("3 buildings, 3 walkways."));
        assert!(out.contains("Shortest path (1 hops, distance 50): A -> C"));
        assert!(out.contains("Average edge weight: 26.67"));
    }

    #[test]
    fn test_menu_stops_at_quit() {
        let out = session("quit\nshortest A B\n");
        assert!(!out.contains("Shortest path"));
    }

    #[test]
    fn test_menu_survives_errors() {
        let out = session("reach A -1\nfrobnicate\nshortest A Z\ncenter\n");
        assert!(out.contains("hop count must be non-negative, got -1"));
        assert!(out.contains("frobnicate"));
        assert!(out.contains("node 'Z' not found"));
        assert!(out.contains("Center: A"));
    }

    #[test]
    fn test_menu_ends_at_eof() {
        let out = session("edges");
        assert!(out.contains("A -- B (10)"));
    }
}
