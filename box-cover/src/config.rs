//! Settings shared by the sweep driver and the command-line tools.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithms::sketch::{DEFAULT_PASSES, DEFAULT_SKETCH_SIZE};
use crate::algorithms::TieBreak;
use crate::error::{Error, Result};

/// The covering method to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Maximum excluded mass burning, parameterized by box radius.
    #[default]
    Memb,
    /// Compact box burning, parameterized by box diameter.
    Cbb,
    /// Random box burning, parameterized by box radius.
    Random,
    /// Greedy selection over bottom-`k` sketches of every ball, parameterized by box radius.
    ///
    /// Each pass redraws the sketches over the nodes not yet covered; at most `passes` are run
    /// before the rest is burned directly.
    Sketch {
        #[serde(default = "default_sketch_size")]
        k: usize,
        #[serde(default = "default_passes")]
        passes: usize,
    },
}

fn default_sketch_size() -> usize {
    DEFAULT_SKETCH_SIZE
}

fn default_passes() -> usize {
    DEFAULT_PASSES
}

impl Method {
    /// True if the method's parameter is a box diameter rather than a radius.
    pub fn is_diameter_based(&self) -> bool {
        matches!(self, Method::Cbb)
    }

    /// The smallest parameter the method accepts.
    pub fn first_parameter(&self) -> u32 {
        if self.is_diameter_based() { 1 } else { 0 }
    }
}

/// Parses `memb`, `cbb`, `random`, or `sketch[:K[:PASSES]]`, ignoring case.
impl FromStr for Method {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        let mut parts = lower.split(':');
        let method = match parts.next().unwrap_or_default() {
            "memb" => Method::Memb,
            "cbb" => Method::Cbb,
            "random" => Method::Random,
            "sketch" => {
                let mut count = |default: usize| -> Result<usize> {
                    match parts.next() {
                        Some(text) => text
                            .parse()
                            .map_err(|_| Error::InvalidArgument(format!("bad number {:?} in method {:?}", text, name))),
                        None => Ok(default),
                    }
                };
                let k = count(DEFAULT_SKETCH_SIZE)?;
                let passes = count(DEFAULT_PASSES)?;
                Method::Sketch { k, passes }
            }
            _ => return Err(Error::InvalidArgument(format!("unknown covering method: {:?}", name))),
        };
        if parts.next().is_some() {
            return Err(Error::InvalidArgument(format!("unexpected arguments in method {:?}", name)));
        }
        Ok(method)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Memb => "MEMB",
            Method::Cbb => "CBB",
            Method::Random => "Random",
            Method::Sketch { .. } => "Sketch",
        };
        f.write_str(name)
    }
}

/// Parameters of a covering sweep.
///
/// Every field has a default, so a configuration file need only name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    pub method: Method,
    pub tie_break: TieBreak,
    /// Seed from which each run's random source is derived.
    pub seed: u64,
    /// Number of timely workers to spread parameters over.
    pub workers: usize,
    /// Largest parameter to try, if the sweep has not collapsed to one box before it.
    pub max_parameter: Option<u32>,
    /// Whether to measure the coverage of each cover's centers.
    pub coverage: bool,
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig {
            method: Method::default(),
            tie_break: TieBreak::default(),
            seed: 0,
            workers: 1,
            max_parameter: None,
            coverage: false,
        }
    }
}

impl CoverConfig {
    /// Reads a configuration from a JSON file and validates it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: CoverConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no sweep can run with.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidArgument("at least one worker is required".to_owned()));
        }
        if let Method::Sketch { k: 0, .. } = self.method {
            return Err(Error::InvalidArgument("sketches must hold at least one rank".to_owned()));
        }
        Ok(())
    }
}
