//! Covering algorithms and the structures they are built from.
//!
//! Every method takes the graph by reference and owns all of its mutable state for the duration
//! of one run, so independent runs (different radii, different seeds) share nothing but the graph.

pub mod assemble;
pub mod bag;
pub mod bfs;
pub mod burning;
pub mod cbb;
pub mod choice;
pub mod coverage;
pub mod distance;
pub mod mass;
pub mod memb;
pub mod sketch;

pub use bfs::BoundedBfs;
pub use burning::random_burning;
pub use cbb::compact_box_burning;
pub use choice::{Chooser, TieBreak};
pub use coverage::{coverage, nearest_centers};
pub use mass::ExcludedMassIndex;
pub use memb::{memb, Memb, Step};
pub use sketch::sketch_cover;
