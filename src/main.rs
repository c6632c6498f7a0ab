//! vitis-pedigree CLI entry point.
//!
//! Reads a `{varieties, nodes, edges}` document from a file or stdin and
//! prints the laid-out pedigree of one variety as JSON.

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::{ArgAction, Parser};

use vitis_pedigree::pedigree::CompositionCalculator;
use vitis_pedigree::{ExplorerConfig, ExplorerState, PedigreeGraph, explore};

/// Grape-variety pedigree explorer.
#[derive(Parser, Debug)]
#[command(
    name = "vitis-pedigree",
    version = env!("VITIS_PEDIGREE_VERSION"),
    about = "Extract, annotate and lay out grape-variety pedigrees as JSON"
)]
struct Cli {
    /// Pedigree JSON document (reads from stdin if not provided)
    input: Option<String>,

    /// Variety whose ancestors to extract
    #[arg(short = 'r', long = "variety")]
    variety: Option<String>,

    /// Give every ancestry path its own node instead of merging repeats
    #[arg(short = 'd', long = "duplicates")]
    duplicates: bool,

    /// Node id to highlight, as if hovered
    #[arg(long = "hover")]
    hover: Option<String>,

    /// Print the variety list and exit
    #[arg(long = "list", conflicts_with_all = ["variety", "composition"])]
    list: bool,

    /// Print the species composition of one variety and exit
    #[arg(long = "composition", conflicts_with = "variety")]
    composition: Option<String>,

    /// JSON file with engine settings (depth, spacing, parent weighting)
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config {
        Some(ref path) => {
            let src = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)));
            ExplorerConfig::from_json_str(&src).unwrap_or_else(|e| fail(e))
        }
        None => ExplorerConfig::default(),
    };

    // Read the document from file or stdin
    let graph = match cli.input {
        Some(ref path) => PedigreeGraph::from_path(path),
        None => PedigreeGraph::from_reader(io::stdin().lock()),
    }
    .unwrap_or_else(|e| fail(e));
    log::info!(
        "loaded {} varieties, {} nodes, {} edges",
        graph.varieties().len(),
        graph.node_count(),
        graph.edge_count()
    );

    let rendered = if cli.list {
        serde_json::to_string_pretty(graph.varieties())
    } else if let Some(ref variety) = cli.composition {
        let composition =
            CompositionCalculator::new(&graph, config.parent_weighting).calculate(variety);
        serde_json::to_string_pretty(&composition.shares())
    } else if let Some(variety) = cli.variety {
        let state = ExplorerState::new(variety)
            .with_duplicates(cli.duplicates)
            .with_hover(cli.hover);
        let view = explore(&graph, &state, &config);
        if view.is_empty() {
            log::warn!("no pedigree found for '{}'", state.selected_variety);
        }
        serde_json::to_string_pretty(&view)
    } else {
        fail("one of --variety, --list or --composition is required");
    };
    let mut rendered = rendered.unwrap_or_else(|e| fail(format!("cannot serialize output: {}", e)));
    rendered.push('\n');

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
