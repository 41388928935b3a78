//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for assembling a [`Configuration`] in code instead of
//! YAML, with the same validation the configuration file goes through.

use crate::base::{ContinuousDistribution, ParameterSpec};
use crate::errors::ConfigError;
use crate::simulation::configs::Configuration;
use crate::simulation::engine::Simulation;
use crate::simulation::parameters::BurnIn;

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use kwtree_sim::base::ContinuousDistribution;
/// use kwtree_sim::simulation::SimulationBuilder;
///
/// // Topology and branch lengths only
/// let sim = SimulationBuilder::new()
///     .species(8)
///     .sites(10)
///     .branch_lengths(ContinuousDistribution::Uniform { lower: 0.1, upper: 1.0 })
///     .seed(42)
///     .build()
///     .unwrap();
///
/// // With count evolution and a random death rate
/// let sim = SimulationBuilder::new()
///     .species(8)
///     .sites(10)
///     .branch_lengths(ContinuousDistribution::Uniform { lower: 0.1, upper: 1.0 })
///     .rates(
///         0.2,
///         ContinuousDistribution::Uniform { lower: 0.2, upper: 0.6 },
///         1.0,
///     )
///     .samples(3)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    number_of_species: Option<usize>,
    branch_length_distribution: Option<ContinuousDistribution>,

    // Optional parameters
    number_of_sites: usize, // Default: 0
    rates: Option<(ParameterSpec, ParameterSpec, ParameterSpec)>, // Default: counts disabled
    number_of_samples: Option<usize>,
    burn_in: BurnIn,
    seed: Option<u64>, // Default: None (fresh entropy)
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leaves (required).
    pub fn species(mut self, number_of_species: usize) -> Self {
        self.number_of_species = Some(number_of_species);
        self
    }

    /// Set the number of sites per node (default: 0).
    pub fn sites(mut self, number_of_sites: usize) -> Self {
        self.number_of_sites = number_of_sites;
        self
    }

    /// Set the branch-length distribution (required).
    pub fn branch_lengths(mut self, distribution: ContinuousDistribution) -> Self {
        self.branch_length_distribution = Some(distribution);
        self
    }

    /// Enable count evolution with the given birth, death and immigration rates.
    pub fn rates(
        mut self,
        lambda: impl Into<ParameterSpec>,
        mu: impl Into<ParameterSpec>,
        m: impl Into<ParameterSpec>,
    ) -> Self {
        self.rates = Some((lambda.into(), mu.into(), m.into()));
        self
    }

    /// Generate `count` suffixed samples instead of a single one.
    pub fn samples(mut self, count: usize) -> Self {
        self.number_of_samples = Some(count);
        self
    }

    /// Override the root burn-in (default: start at 500 and run for 1000).
    pub fn burn_in(mut self, initial_state: u64, time: f64) -> Self {
        self.burn_in = BurnIn::new(initial_state, time);
        self
    }

    /// Set the random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without creating a simulation.
    pub fn build_config(self) -> Result<Configuration, ConfigError> {
        let number_of_species = self
            .number_of_species
            .ok_or(ConfigError::MissingRequired("number-of-species"))?;
        let branch_length_distribution = self
            .branch_length_distribution
            .ok_or(ConfigError::MissingRequired("branch-length-distribution"))?;
        let (lambda, mu, m) = match self.rates {
            Some((lambda, mu, m)) => (Some(lambda), Some(mu), Some(m)),
            None => (None, None, None),
        };

        let config = Configuration {
            seed: self.seed,
            branch_length_distribution,
            lambda,
            mu,
            m,
            number_of_species,
            number_of_sites: self.number_of_sites,
            number_of_samples: self.number_of_samples,
            burn_in: self.burn_in,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.build_config()?)
    }
}
