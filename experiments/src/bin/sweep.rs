//! Box counts of a graph over increasing box sizes.
//!
//! Usage:
//!   sweep [INPUT] [--generate KIND:ARGS] [--method memb|cbb|random|sketch[:K[:PASSES]]] [--workers N] [--output report.json]
//!
//! Prints one line per box size, `parameter size seconds`, and optionally writes the JSON report
//! consumed by the fitting and plotting scripts.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use box_cover::{checked_radius, sweep, CoverConfig, Method, Report, TieBreak};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Count boxes for increasing box radius (or diameter) until one box remains")]
struct Args {
    /// Edge list to read, `-` for standard input.
    input: Option<PathBuf>,

    /// Generate a graph instead, e.g. `ba:10000:2` or `grid:50x50`.
    #[arg(long)]
    generate: Option<String>,

    /// Map arbitrary node labels to dense ids.
    #[arg(long)]
    relabel: bool,

    /// JSON configuration file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    method: Option<Method>,

    #[arg(long)]
    tie_break: Option<TieBreak>,

    #[arg(long)]
    seed: Option<u64>,

    /// Number of timely workers.
    #[arg(long)]
    workers: Option<usize>,

    /// Largest radius (or diameter) to try.
    #[arg(long, allow_negative_numbers = true)]
    max_parameter: Option<i64>,

    /// Also measure the fraction of nodes each cover's centers reach.
    #[arg(long)]
    coverage: bool,

    /// Where to write the JSON report.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    box_cover::logging::enable("box_cover=info");
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CoverConfig::from_path(path)?,
        None => CoverConfig::default(),
    };
    if let Some(method) = args.method {
        config.method = method;
    }
    if let Some(tie_break) = args.tie_break {
        config.tie_break = tie_break;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(max) = args.max_parameter {
        config.max_parameter = Some(checked_radius(max)?);
    }
    config.coverage |= args.coverage;
    config.validate()?;

    let (name, loaded) = experiments::load_graph(args.input.as_deref(), args.generate.as_deref(), args.relabel, config.seed)?;
    tracing::info!("loaded {}: {} nodes, {} edges", name, loaded.graph.nodes(), loaded.graph.edges());

    let graph = Arc::new(loaded.graph);
    let series = sweep(Arc::clone(&graph), &config)?;

    let label = if config.method.is_diameter_based() { "diameter" } else { "radius" };
    println!("{}\tsize\tseconds", label);
    for measurement in series.measurements.iter() {
        match measurement.coverage {
            Some(coverage) => println!("{}\t{}\t{:.6}\t{:.4}", measurement.parameter, measurement.size, measurement.seconds, coverage),
            None => println!("{}\t{}\t{:.6}", measurement.parameter, measurement.size, measurement.seconds),
        }
    }

    if let Some(path) = &args.output {
        Report::new(&series, name, &graph).write_json(path)?;
        tracing::info!("wrote report to {}", path.display());
    }

    Ok(())
}
