//! Reading and writing graphs as plain-text edge lists.
//!
//! One edge per line, as two whitespace-separated non-negative integers. Further columns (weights,
//! timestamps) are ignored. Blank lines and lines starting with `#` or `%` are comments.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use fnv::FnvHashMap;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Without relabeling, ids may exceed the number of edges by at most this factor (or `MIN_ID_SPAN`).
const ID_SPAN_PER_EDGE: usize = 16;
const MIN_ID_SPAN: usize = 1 << 16;

/// A graph read from an edge list, with the labels its nodes carried in the file.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// Original label of each node, when labels were compacted on load.
    pub labels: Option<Vec<u64>>,
}

impl LoadedGraph {
    /// The label `node` carried in the input.
    pub fn label(&self, node: Node) -> u64 {
        match &self.labels {
            Some(labels) => labels[node],
            None => node as u64,
        }
    }
}

/// Parses labeled edges, skipping comments. Line numbers in errors count from one.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(u64, u64)>> {
    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') || text.starts_with('%') {
            continue;
        }

        let number = index + 1;
        let mut fields = text.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(source), Some(target)) => pairs.push((parse_label(source, number)?, parse_label(target, number)?)),
            _ => return Err(Error::Parse { line: number, reason: "expected two node labels".to_owned() }),
        }
    }
    Ok(pairs)
}

fn parse_label(field: &str, line: usize) -> Result<u64> {
    field.parse().map_err(|err| Error::Parse { line, reason: format!("bad node label {:?}: {}", field, err) })
}

/// Reads an edge list into a graph.
///
/// With `relabel`, arbitrary labels are mapped to `0 .. n` in order of first appearance and the
/// label table is kept. Without it, labels are used as node ids directly and the graph spans
/// `0 ..= max label`, so unmentioned ids become isolated nodes. Labels far beyond the number of
/// edges are refused rather than allocated for; such files need `relabel`.
pub fn parse_edge_list<R: BufRead>(reader: R, relabel: bool) -> Result<LoadedGraph> {
    let pairs = read_pairs(reader)?;

    if relabel {
        let mut ids: FnvHashMap<u64, Node> = FnvHashMap::default();
        let mut labels = Vec::new();
        let mut id_of = |label: u64| {
            *ids.entry(label).or_insert_with(|| {
                labels.push(label);
                labels.len() - 1
            })
        };
        let edges: Vec<(Node, Node)> = pairs.iter().map(|&(s, t)| (id_of(s), id_of(t))).collect();
        let graph = Graph::new(labels.len(), &edges)?;
        Ok(LoadedGraph { graph, labels: Some(labels) })
    } else {
        let span = pairs.len().saturating_mul(ID_SPAN_PER_EDGE).max(MIN_ID_SPAN);
        let mut edges = Vec::with_capacity(pairs.len());
        for (source, target) in pairs {
            match (Node::try_from(source), Node::try_from(target)) {
                (Ok(source), Ok(target)) if source.max(target) < span => edges.push((source, target)),
                _ => {
                    return Err(Error::InvalidArgument(format!(
                        "node label {} is too sparse for direct ids (limit {}); use relabeling",
                        source.max(target),
                        span
                    )))
                }
            }
        }
        Ok(LoadedGraph { graph: Graph::from_edges(&edges), labels: None })
    }
}

/// Reads an edge list from `path`, or from standard input when `path` is `-`.
pub fn load_edge_list<P: AsRef<Path>>(path: P, relabel: bool) -> Result<LoadedGraph> {
    let path = path.as_ref();
    if path == Path::new("-") {
        parse_edge_list(io::stdin().lock(), relabel)
    } else {
        parse_edge_list(BufReader::new(File::open(path)?), relabel)
    }
}

/// Writes each undirected edge once, as `u v` with `u <= v`.
pub fn write_edge_list<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    for (source, target) in graph.edge_pairs() {
        writeln!(writer, "{} {}", source, target)?;
    }
    writer.flush()?;
    Ok(())
}
