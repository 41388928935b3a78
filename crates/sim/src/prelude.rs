//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the kwtree library.
//!
//! # Example
//!
//! ```
//! use kwtree_sim::prelude::*;
//!
//! let mut sim = SimulationBuilder::new()
//!     .species(10)
//!     .sites(4)
//!     .branch_lengths(ContinuousDistribution::Uniform { lower: 0.1, upper: 1.0 })
//!     .rates(0.2, 0.5, 1.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let sample = sim.next_sample().unwrap().unwrap();
//! assert_eq!(sample.tree.node_count(), 19);
//! ```

pub use crate::errors::{self, ConfigError, SimulationError, StorageError, TopologyError};
pub use crate::base::{ContinuousDistribution, ParameterSpec, SimRng};
pub use crate::evolution::BirthDeathImmigration;
pub use crate::simulation::{Configuration, Sample, Simulation, SimulationBuilder};
pub use crate::tree::{PhyloTree, ROOT};
