//! Storage module for writing generated samples.
//!
//! Samples are written as plain text: the primary tree file, an optional
//! k-word count dump and an optional Newick topology.

mod newick;
mod writer;

pub use newick::{to_newick, write_newick_file};
pub use writer::{
    append_to_path, sample_paths, write_count_file, write_counts, write_sample, write_tree,
};
