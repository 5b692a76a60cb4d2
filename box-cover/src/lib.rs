//! Box covering of undirected graphs, for network renormalization studies.
//!
//! A box covering of radius `rb` partitions the nodes of a graph into "boxes", each built around a
//! center node so that every member lies within `rb` hops of its center. The number of boxes needed
//! as a function of `rb` is the quantity studied when estimating the fractal dimension of a network:
//! a fractal network shows a power law `N_B(rb) ~ rb^-d_B`.
//!
//! The main algorithm is MEMB (maximum excluded mass burning), a greedy heuristic which repeatedly
//! confirms as a new center the node whose ball covers the most not-yet-covered nodes. Excluded masses
//! are held in a bucketed index and re-validated lazily, so only the current best candidate is ever
//! recomputed. Once every node is covered, non-center nodes are assigned to boxes by walking outward
//! from the centers in order of increasing central distance.
//!
//! Random burning, compact box burning (CBB) and greedy covering over bottom-k ball sketches produce
//! results of the same type.
//!
//! # Examples
//!
//! ```
//! use box_cover::{Graph, TieBreak};
//! use box_cover::algorithms::memb;
//!
//! // the four-cycle 0-1-2-3-0
//! let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
//!
//! let cover = memb(&graph, 1, TieBreak::Random, 0);
//! assert_eq!(cover.size(), 2);
//! assert!(cover.is_partition_of(&graph));
//!
//! let cover = memb(&graph, 0, TieBreak::Random, 0);
//! assert_eq!(cover.size(), 4);
//! ```
//!
//! Sweeping the radius until the whole graph collapses into one box gives the size series used for
//! curve fitting downstream:
//!
//! ```
//! use std::sync::Arc;
//! use box_cover::{generators, sweep, CoverConfig};
//!
//! let graph = Arc::new(generators::path(9));
//! let series = sweep(graph, &CoverConfig::default()).unwrap();
//! assert_eq!(series.sizes().first(), Some(&9));
//! assert_eq!(series.sizes().last(), Some(&1));
//! ```

pub mod algorithms;
pub mod config;
pub mod cover;
pub mod error;
pub mod generators;
pub mod graph;
pub mod io;
pub mod logging;
pub mod report;
pub mod sweep;

pub use algorithms::TieBreak;
pub use config::{CoverConfig, Method};
pub use cover::BoxCover;
pub use error::{checked_radius, Error, Result};
pub use graph::{Graph, Node};
pub use report::Report;
pub use sweep::{sweep, Measurement, Sweep};
