//! Tree model, random topologies and branch lengths.

pub mod branch_length;
pub mod model;
pub mod topology;

pub use branch_length::assign_branch_lengths;
pub use model::{CountMatrix, Edge, NodeId, PhyloTree, ROOT};
pub use topology::generate_random_topology;
