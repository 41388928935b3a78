//! Error types shared across the simulation crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised while loading or validating a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid YAML or does not match the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required parameter was not provided.
    #[error("missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// A parameter has a value outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Only some of `lambda`, `mu` and `m` were given.
    #[error("lambda, mu and m must either all be given or all be omitted")]
    IncompleteRates,

    /// A distribution cannot be sampled from (e.g. `lower > upper`).
    #[error("invalid {name} distribution: {reason}")]
    InvalidDistribution { name: &'static str, reason: String },
}

/// Errors raised while generating a tree topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("number of species must be at least 1 (got {0})")]
    InvalidSpeciesCount(usize),
}

/// Errors raised while sampling a tree or evolving counts along it.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The chain has no outgoing transition although time remains.
    ///
    /// This happens when `m = 0` and the state reaches 0 (or all rates are 0).
    /// The process is undefined for such parameters, so the run is aborted.
    #[error(
        "total transition rate is zero at state {state} (elapsed {elapsed} of {time}); \
         the birth-death-immigration process is undefined for these parameters"
    )]
    ZeroTotalRate { state: u64, elapsed: f64, time: f64 },

    /// A rate is negative or not a number.
    #[error("invalid transition rate: {0}")]
    InvalidRate(String),

    /// Counts were requested on an edge whose length was never assigned.
    #[error("edge {from} -> {to} has no branch length")]
    MissingBranchLength { from: NodeId, to: NodeId },

    /// A configured distribution could not be sampled.
    #[error("distribution error: {0}")]
    Distribution(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
