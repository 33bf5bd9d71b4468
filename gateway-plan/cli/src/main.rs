use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use gateway_plan::PlannerConfig;
use gateway_plan::Supergraph;
use gateway_plan::SubgraphRegistry;
use gateway_plan::operations::RootOperations;
use tracing_subscriber::EnvFilter;

/// CLI arguments. See <https://docs.rs/clap/latest/clap/_derive/index.html>
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compiles a supergraph schema into its subgraph registry and query plan
    Plan {
        /// The path to the supergraph schema file, or `-` for stdin
        supergraph_schema: PathBuf,
        /// Fail when a field cannot be attributed to any subgraph
        #[arg(long)]
        strict: bool,
        /// A JSON file with planner options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Lists the subgraphs declared by a supergraph schema
    Subgraphs {
        /// The path to the supergraph schema file, or `-` for stdin
        supergraph_schema: PathBuf,
    },
    /// Routes every root query and mutation field to its subgraph
    Operations {
        /// The path to the supergraph schema file, or `-` for stdin
        supergraph_schema: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let output = match args.command {
        Command::Plan {
            supergraph_schema,
            strict,
            config,
        } => plan(&supergraph_schema, strict, config.as_deref(), args.format)?,
        Command::Subgraphs { supergraph_schema } => {
            let subgraphs = load(&supergraph_schema)?.subgraphs()?;
            match args.format {
                Format::Json => serde_json::to_string_pretty(&subgraphs)?,
                Format::Text => subgraphs_text(&subgraphs),
            }
        }
        Command::Operations { supergraph_schema } => {
            let operations = load(&supergraph_schema)?.root_operations()?;
            match args.format {
                Format::Json => serde_json::to_string_pretty(&operations)?,
                Format::Text => operations_text(&operations),
            }
        }
    };
    println!("{output}");
    Ok(())
}

fn plan(
    input_path: &Path,
    strict: bool,
    config_path: Option<&Path>,
    format: Format,
) -> anyhow::Result<String> {
    let mut config = match config_path {
        Some(path) => {
            let config = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<PlannerConfig>(&config)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };
    config.strict_ownership |= strict;

    let compiled = load(input_path)?.compile(config)?;
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(&compiled)?,
        Format::Text => format!(
            "{}\n{}",
            subgraphs_text(&compiled.subgraphs),
            compiled.query_plan
        ),
    })
}

fn load(input_path: &Path) -> anyhow::Result<Supergraph> {
    let input = if input_path == Path::new("-") {
        io::read_to_string(io::stdin()).context("reading stdin")?
    } else {
        fs::read_to_string(input_path)
            .with_context(|| format!("reading {}", input_path.display()))?
    };
    Ok(Supergraph::new(&input)?)
}

fn subgraphs_text(subgraphs: &SubgraphRegistry) -> String {
    let mut text = String::new();
    for subgraph in subgraphs.iter() {
        let _ = writeln!(text, "{} ({}): {}", subgraph.enum_key, subgraph.name, subgraph.url);
    }
    text
}

fn operations_text(operations: &RootOperations) -> String {
    let mut text = String::new();
    for (label, routes) in [("query", &operations.queries), ("mutation", &operations.mutations)] {
        for route in routes {
            let _ = write!(text, "{label} {}: {} -> {}", route.name, route.ty, route.subgraph);
            if let Some(reason) = &route.deprecation_reason {
                let _ = write!(text, " (deprecated: {reason})");
            }
            text.push('\n');
        }
    }
    text
}
