//! Base building blocks shared by every stage of a run.
//!
//! This module provides the random source and the distributions that
//! branch lengths and rates are drawn from.

pub mod distribution;
pub mod rng;

pub use distribution::{ContinuousDistribution, ContinuousSampler, ParameterSpec};
pub use rng::{seeded_rng, SimRng};
