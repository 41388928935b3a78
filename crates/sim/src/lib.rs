//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for generating random rooted
//! phylogenetic trees with per-site k-word counts. It includes modules for
//! the tree model, random topologies and branch lengths, the
//! birth-death-immigration chain that evolves counts along the tree, the run
//! configuration and engine, and the plain-text writers.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;
pub mod storage;
pub mod tree;

pub use simulation::{Configuration, Sample, Simulation};
pub use tree::PhyloTree;
