//! The JSON artifact handed to downstream curve fitting and plotting.
//!
//! ```json
//! {
//!   "name": "MEMB",
//!   "graph_info": [{ "graph": "karate.tsv", "vertices": 34, "edges": 78 }],
//!   "size": [34, 6, 2, 1],
//!   "time": [0.0001, 0.0002, 0.0002, 0.0001],
//!   "radius": [0, 1, 2, 3]
//! }
//! ```
//!
//! Diameter-based methods emit `diameter` in place of `radius`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Graph;
use crate::sweep::Sweep;

/// Identification of the graph a report was computed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    pub graph: String,
    pub vertices: usize,
    pub edges: usize,
}

impl GraphInfo {
    pub fn new(name: impl Into<String>, graph: &Graph) -> Self {
        GraphInfo { graph: name.into(), vertices: graph.nodes(), edges: graph.edges() }
    }
}

/// The parameter series of a report: radii or diameters, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "radius")]
    Radius(Vec<u32>),
    #[serde(rename = "diameter")]
    Diameter(Vec<u32>),
}

impl Series {
    pub fn values(&self) -> &[u32] {
        match self {
            Series::Radius(values) | Series::Diameter(values) => values,
        }
    }
}

/// Box counts against box size for one method on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub graph_info: Vec<GraphInfo>,
    pub size: Vec<usize>,
    pub time: Vec<f64>,
    #[serde(flatten)]
    pub series: Series,
    /// Fraction of nodes reached by each cover's centers, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Vec<f64>>,
}

impl Report {
    /// Summarizes `sweep`, labeled with the method name and `graph_name`.
    pub fn new(sweep: &Sweep, graph_name: impl Into<String>, graph: &Graph) -> Self {
        let parameters = sweep.measurements.iter().map(|m| m.parameter).collect();
        let series = if sweep.method.is_diameter_based() {
            Series::Diameter(parameters)
        } else {
            Series::Radius(parameters)
        };
        let coverage = sweep.measurements.iter().map(|m| m.coverage).collect::<Option<Vec<_>>>();

        Report {
            name: sweep.method.to_string(),
            graph_info: vec![GraphInfo::new(graph_name, graph)],
            size: sweep.sizes(),
            time: sweep.measurements.iter().map(|m| m.seconds).collect(),
            series,
            coverage: coverage.filter(|values| !values.is_empty()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Method;
    use crate::sweep::Measurement;

    fn sweep(method: Method) -> Sweep {
        let measurements = (1 ..= 3)
            .map(|parameter| Measurement {
                parameter,
                size: 4 - parameter as usize,
                seconds: 0.5,
                coverage: None,
            })
            .collect();
        Sweep { method, measurements }
    }

    #[test]
    fn radius_or_diameter() {
        let graph = Graph::empty(3);
        let value = serde_json::to_value(Report::new(&sweep(Method::Memb), "g", &graph)).unwrap();
        assert_eq!(value["name"], "MEMB");
        assert_eq!(value["radius"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["size"], serde_json::json!([3, 2, 1]));
        assert_eq!(value["graph_info"][0]["vertices"], 3);
        assert!(value.get("diameter").is_none());
        assert!(value.get("coverage").is_none());

        let value = serde_json::to_value(Report::new(&sweep(Method::Cbb), "g", &graph)).unwrap();
        assert_eq!(value["diameter"], serde_json::json!([1, 2, 3]));
        assert!(value.get("radius").is_none());
    }

    #[test]
    fn reads_back() {
        let report = Report::new(&sweep(Method::Random), "g", &Graph::empty(1));
        let parsed: Report = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.series.values(), &[1, 2, 3]);
    }
}
