//! Shared plumbing for the command-line drivers: where the graph comes from.

use std::path::Path;

use anyhow::{bail, Context};

use box_cover::generators;
use box_cover::io::{load_edge_list, LoadedGraph};

/// Loads the graph named on the command line.
///
/// Either `input` is an edge-list file (`-` for standard input) or `generate` describes a synthetic
/// graph, one of
///
/// * `path:N`, `cycle:N`, `star:N`, `complete:N`, `barbell:K`
/// * `grid:RxC`
/// * `er:N:M` (Erdős–Rényi, `M` edges), `ba:N:L` (Barabási–Albert, `L` links per node)
///
/// Returns a name for the graph along with the graph.
pub fn load_graph(input: Option<&Path>, generate: Option<&str>, relabel: bool, seed: u64) -> anyhow::Result<(String, LoadedGraph)> {
    match (input, generate) {
        (Some(path), None) => {
            let loaded = load_edge_list(path, relabel).with_context(|| format!("reading {}", path.display()))?;
            let name = match path.file_name() {
                Some(name) if path != Path::new("-") => name.to_string_lossy().into_owned(),
                _ => "stdin".to_owned(),
            };
            Ok((name, loaded))
        }
        (None, Some(description)) => {
            let graph = generate_graph(description, seed)?;
            Ok((description.to_owned(), LoadedGraph { graph, labels: None }))
        }
        (Some(_), Some(_)) => bail!("give either an input file or --generate, not both"),
        (None, None) => bail!("no graph: give an input file or --generate"),
    }
}

fn generate_graph(description: &str, seed: u64) -> anyhow::Result<box_cover::Graph> {
    let mut parts = description.split(':');
    let kind = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let number = |index: usize| -> anyhow::Result<usize> {
        let text = args.get(index).with_context(|| format!("{:?} needs more arguments", description))?;
        text.parse().with_context(|| format!("bad number {:?} in {:?}", text, description))
    };

    let graph = match kind {
        "path" => generators::path(number(0)?),
        "cycle" => generators::cycle(number(0)?),
        "star" => generators::star(number(0)?),
        "complete" => generators::complete(number(0)?),
        "barbell" => generators::barbell(number(0)?),
        "grid" => {
            let shape = args.first().with_context(|| "grid needs a shape such as grid:10x20")?;
            let (rows, cols) = shape.split_once('x').with_context(|| format!("bad grid shape {:?}", shape))?;
            generators::grid(rows.parse()?, cols.parse()?)
        }
        "er" => generators::erdos_renyi(number(0)?, number(1)?, seed),
        "ba" => generators::barabasi_albert(number(0)?, number(1)?, seed),
        other => bail!("unknown graph kind {:?}", other),
    };
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_graphs() {
        let (name, loaded) = load_graph(None, Some("grid:3x4"), false, 0).unwrap();
        assert_eq!(name, "grid:3x4");
        assert_eq!(loaded.graph.nodes(), 12);
        assert_eq!(generate_graph("ba:50:2", 1).unwrap().nodes(), 50);
        assert!(generate_graph("path", 0).is_err());
        assert!(generate_graph("torus:5", 0).is_err());
        assert!(load_graph(None, None, false, 0).is_err());
    }
}
