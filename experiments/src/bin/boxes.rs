//! One covering pass, printing the members of every box.
//!
//! Output is one line per box, `center: member member ...`, in the labels of the input file. With
//! `--json` the same mapping is written as a JSON object instead, for visualization.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use box_cover::sweep::cover;
use box_cover::{checked_radius, Method, TieBreak};

#[derive(Parser, Debug)]
#[command(name = "boxes")]
#[command(about = "Cover a graph once and list the boxes")]
struct Args {
    /// Edge list to read, `-` for standard input.
    input: Option<PathBuf>,

    /// Generate a graph instead, e.g. `path:100`.
    #[arg(long)]
    generate: Option<String>,

    #[arg(long)]
    relabel: bool,

    #[arg(long, default_value = "memb")]
    method: Method,

    /// Box radius, or box diameter for CBB.
    #[arg(long, allow_negative_numbers = true)]
    radius: i64,

    #[arg(long, default_value = "random")]
    tie_break: TieBreak,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write `{center: [members]}` as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    box_cover::logging::enable("box_cover=info");
    let args = Args::parse();
    let radius = checked_radius(args.radius)?;

    let (name, loaded) = experiments::load_graph(args.input.as_deref(), args.generate.as_deref(), args.relabel, args.seed)?;
    let boxes = cover(&loaded.graph, args.method, radius, args.tie_break, args.seed)?;
    tracing::info!("{}: {} boxes at {} {}", name, boxes.size(), args.method, radius);

    let labeled: BTreeMap<u64, Vec<u64>> = boxes
        .boxes()
        .into_iter()
        .map(|(center, members)| (loaded.label(center), members.into_iter().map(|node| loaded.label(node)).collect()))
        .collect();

    match &args.json {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &labeled)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (center, members) in labeled.iter() {
                let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                writeln!(out, "{}: {}", center, members.join(" "))?;
            }
            for (size, count) in boxes.size_distribution() {
                tracing::debug!(size, count, "box size distribution");
            }
        }
    }

    Ok(())
}
