//! Count evolution along the tree.
//!
//! - **ctmc**: the birth-death-immigration chain sampled with the Gillespie
//!   algorithm
//! - **propagation**: root burn-in and breadth-first propagation of counts

pub mod ctmc;
pub mod propagation;

pub use ctmc::{BirthDeathImmigration, Trajectory};
pub use propagation::{burn_in_root_states, propagate_counts};
