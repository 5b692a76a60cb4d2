//! Tie-breaking among equally good candidates.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::Node;

/// How to pick one node out of several equally ranked ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Uniformly at random, from a seeded generator.
    #[default]
    Random,
    /// The smallest node identifier.
    LowestId,
}

impl FromStr for TieBreak {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "random" => Ok(TieBreak::Random),
            "lowest-id" | "lowest" => Ok(TieBreak::LowestId),
            other => Err(Error::InvalidArgument(format!("unknown tie-break strategy: {:?}", other))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Random => write!(f, "random"),
            TieBreak::LowestId => write!(f, "lowest-id"),
        }
    }
}

/// A tie-break strategy bound to its own random source.
///
/// Two choosers built from the same strategy and seed make identical choices when shown identical
/// candidate lists, which is what makes covering runs reproducible.
#[derive(Debug, Clone)]
pub struct Chooser {
    strategy: TieBreak,
    rng: ChaCha8Rng,
}

impl Chooser {
    /// Creates a chooser for `strategy`, seeding its generator with `seed`.
    pub fn new(strategy: TieBreak, seed: u64) -> Self {
        Chooser { strategy, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Returns the position in `candidates` of the chosen node.
    ///
    /// Panics if `candidates` is empty.
    pub fn pick(&mut self, candidates: &[Node]) -> usize {
        assert!(!candidates.is_empty(), "asked to choose among no candidates");
        match self.strategy {
            TieBreak::Random => self.rng.gen_range(0 .. candidates.len()),
            TieBreak::LowestId => {
                let mut best = 0;
                for (position, &node) in candidates.iter().enumerate().skip(1) {
                    if node < candidates[best] {
                        best = position;
                    }
                }
                best
            }
        }
    }
}

/// Derives the seed for one run of a sweep from the sweep seed and the run's parameter.
///
/// Runs therefore do not depend on which worker executes them, or in what order.
pub fn run_seed(seed: u64, parameter: u32) -> u64 {
    seed ^ u64::from(parameter).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
