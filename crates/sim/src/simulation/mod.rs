//! Run configuration and the simulation engine.
//!
//! - `Configuration`: the YAML document describing a run.
//! - `Simulation`: owns the run's generator and produces samples in order.
//! - `SimulationBuilder`: fluent construction of a validated configuration
//!   and simulation from code.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod parameters;

pub use builder::SimulationBuilder;
pub use configs::Configuration;
pub use engine::{Sample, Samples, Simulation};
pub use parameters::{BurnIn, RateConfig, DEFAULT_BURN_IN_STATE, DEFAULT_BURN_IN_TIME};
