//! Box counts over increasing box sizes.
//!
//! A sweep runs one independent covering per parameter value, starting from the smallest value the
//! method accepts, until the graph collapses into a single box. Each run derives its own seed from
//! the configured seed and its parameter, and owns all of its mutable state, so runs may be spread
//! over timely workers without changing any result.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::algorithms::bfs::component_bound;
use crate::algorithms::choice::run_seed;
use crate::algorithms::{compact_box_burning, coverage, memb, random_burning, sketch_cover, TieBreak};
use crate::config::{CoverConfig, Method};
use crate::cover::BoxCover;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// One covering run of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Box radius, or box diameter for diameter-based methods.
    pub parameter: u32,
    /// Number of boxes.
    pub size: usize,
    /// Wall-clock time of the covering run.
    pub seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
}

/// The measurements of a sweep, in increasing parameter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub method: Method,
    pub measurements: Vec<Measurement>,
}

impl Sweep {
    /// Box counts, indexed like `measurements`.
    pub fn sizes(&self) -> Vec<usize> {
        self.measurements.iter().map(|m| m.size).collect()
    }

    pub fn parameters(&self) -> Vec<u32> {
        self.measurements.iter().map(|m| m.parameter).collect()
    }
}

/// Runs one covering of `graph` with `method` at `parameter`.
///
/// Fails only for parameters outside the method's domain (a CBB diameter of zero, an empty sketch).
pub fn cover(graph: &Graph, method: Method, parameter: u32, tie_break: TieBreak, seed: u64) -> Result<BoxCover> {
    match method {
        Method::Memb => Ok(memb(graph, parameter, tie_break, seed)),
        Method::Random => Ok(random_burning(graph, parameter, tie_break, seed)),
        Method::Cbb => compact_box_burning(graph, parameter, tie_break, seed),
        Method::Sketch { k, passes } => sketch_cover(graph, parameter, k, passes, tie_break, seed),
    }
}

/// Runs and times the covering for `parameter` under `config`.
pub fn measure(graph: &Graph, config: &CoverConfig, parameter: u32) -> Result<Measurement> {
    let timer = Instant::now();
    let boxes = cover(graph, config.method, parameter, config.tie_break, run_seed(config.seed, parameter))?;
    let seconds = timer.elapsed().as_secs_f64();

    let reached = if config.coverage {
        // every member of a diameter-`l` box lies within `l - 1` hops of its center
        let reach = if config.method.is_diameter_based() { parameter.saturating_sub(1) } else { parameter };
        Some(coverage(graph, boxes.centers(), reach))
    } else {
        None
    };

    info!(method = %config.method, parameter, size = boxes.size(), seconds, "covering complete");
    Ok(Measurement { parameter, size: boxes.size(), seconds, coverage: reached })
}

/// The largest parameter worth trying: beyond it, the box count cannot fall any further.
///
/// Let `e` be the largest eccentricity found among one representative per component. At radius
/// `e` the representative's ball spans its component, which is enough for MEMB since it takes the
/// heaviest ball first. Methods that may center a box anywhere need the eccentricity of an
/// arbitrary node, at most `2e`, and box diameters within a component are bounded by `2e` as well.
pub fn parameter_bound(graph: &Graph, method: Method) -> u32 {
    let bound = component_bound(graph);
    match method {
        Method::Memb => bound,
        Method::Random | Method::Sketch { .. } => bound.saturating_mul(2),
        Method::Cbb => bound.saturating_mul(2).saturating_add(1),
    }
}

/// Covers `graph` at increasing parameters until it forms a single box.
///
/// The series starts at the method's first parameter and ends at the first parameter with at most
/// one box, at `config.max_parameter`, or at `parameter_bound`, whichever comes first. A
/// disconnected graph never reaches one box and ends at the bound.
pub fn sweep(graph: Arc<Graph>, config: &CoverConfig) -> Result<Sweep> {
    config.validate()?;

    let first = config.method.first_parameter();
    let mut last = parameter_bound(&graph, config.method);
    if let Some(max) = config.max_parameter {
        last = last.min(max);
    }
    info!(
        method = %config.method,
        nodes = graph.nodes(),
        edges = graph.edges(),
        first,
        last,
        workers = config.workers,
        "starting sweep"
    );

    let mut measurements = if config.workers > 1 {
        sweep_parallel(graph, config, first, last)?
    } else {
        sweep_range(&graph, config, first, last, 0, 1)?
    };

    measurements.sort_by_key(|m| m.parameter);
    if let Some(position) = measurements.iter().position(|m| m.size <= 1) {
        measurements.truncate(position + 1);
    }

    Ok(Sweep { method: config.method, measurements })
}

/// The parameters in `first ..= last` assigned to worker `index` of `peers`, measured in order.
///
/// Stops early once a run yields at most one box: every larger parameter would too.
fn sweep_range(
    graph: &Graph,
    config: &CoverConfig,
    first: u32,
    last: u32,
    index: usize,
    peers: usize,
) -> Result<Vec<Measurement>> {
    let mut measurements = Vec::new();
    if first > last {
        return Ok(measurements);
    }
    for parameter in (first ..= last).skip(index).step_by(peers) {
        let measurement = measure(graph, config, parameter)?;
        let collapsed = measurement.size <= 1;
        measurements.push(measurement);
        if collapsed {
            break;
        }
    }
    Ok(measurements)
}

fn sweep_parallel(graph: Arc<Graph>, config: &CoverConfig, first: u32, last: u32) -> Result<Vec<Measurement>> {
    let timely_config = timely::Config {
        communication: timely::CommunicationConfig::Process(config.workers),
        worker: timely::WorkerConfig::default(),
    };

    let shared = config.clone();
    let guards = timely::execute(timely_config, move |worker| {
        sweep_range(&graph, &shared, first, last, worker.index(), worker.peers())
            .map_err(|error| error.to_string())
    })
    .map_err(Error::Worker)?;

    let mut measurements = Vec::new();
    for result in guards.join() {
        measurements.extend(result.map_err(Error::Worker)?.map_err(Error::Worker)?);
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn path_sweep_collapses() {
        let series = sweep(Arc::new(generators::path(9)), &CoverConfig::default()).unwrap();
        assert_eq!(series.parameters(), (0 ..= 4).collect::<Vec<_>>());
        assert_eq!(series.sizes()[0], 9);
        assert_eq!(series.sizes()[4], 1);
    }

    #[test]
    fn max_parameter_caps() {
        let config = CoverConfig { max_parameter: Some(1), ..CoverConfig::default() };
        let series = sweep(Arc::new(generators::path(9)), &config).unwrap();
        assert_eq!(series.parameters(), vec![0, 1]);
    }

    #[test]
    fn disconnected_stops_at_bound() {
        let graph = Graph::new(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let series = sweep(Arc::new(graph), &CoverConfig::default()).unwrap();
        assert_eq!(series.parameters(), vec![0, 1, 2]);
        assert_eq!(*series.sizes().last().unwrap(), 2);
    }

    #[test]
    fn bounds_by_method() {
        let graph = generators::star(6);
        assert_eq!(parameter_bound(&graph, Method::Memb), 1);
        assert_eq!(parameter_bound(&graph, Method::Random), 2);
        assert_eq!(parameter_bound(&graph, Method::Cbb), 3);
    }

    #[test]
    fn cbb_starts_at_one() {
        let config = CoverConfig { method: Method::Cbb, ..CoverConfig::default() };
        let series = sweep(Arc::new(generators::complete(5)), &config).unwrap();
        assert_eq!(series.parameters(), vec![1, 2]);
        assert_eq!(series.sizes(), vec![5, 1]);
    }

    #[test]
    fn empty_graph() {
        let series = sweep(Arc::new(Graph::empty(0)), &CoverConfig::default()).unwrap();
        assert_eq!(series.sizes(), vec![0]);
    }

    #[test]
    fn zero_workers_rejected() {
        let config = CoverConfig { workers: 0, ..CoverConfig::default() };
        assert!(sweep(Arc::new(generators::path(3)), &config).is_err());
    }

    #[test]
    fn coverage_is_recorded() {
        let config = CoverConfig { coverage: true, ..CoverConfig::default() };
        let series = sweep(Arc::new(generators::grid(4, 4)), &config).unwrap();
        assert!(series.measurements.iter().all(|m| m.coverage == Some(1.0)));
    }
}
