//! Simulation engine.
//!
//! A [`Simulation`] owns the run's single random generator and produces
//! [`Sample`]s one after another. Each sample goes through the same stages,
//! always in this order so that a seed fully determines the output:
//!
//! 1. resolve `lambda`, `mu` and `m` (when count simulation is enabled)
//! 2. generate a random topology
//! 3. draw branch lengths
//! 4. burn in one root state per site
//! 5. propagate counts from the root to the leaves

use log::{debug, info};

use crate::base::rng::{rng_from_optional_seed, SimRng};
use crate::base::ContinuousSampler;
use crate::errors::{ConfigError, SimulationError};
use crate::evolution::{burn_in_root_states, propagate_counts, BirthDeathImmigration};
use crate::simulation::configs::Configuration;
use crate::simulation::parameters::RateConfig;
use crate::tree::{assign_branch_lengths, generate_random_topology, PhyloTree};

/// One generated tree together with the rates its counts were evolved with.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Position of the sample in the batch
    pub index: usize,
    /// Resolved rates, `None` when count simulation is disabled
    pub rates: Option<BirthDeathImmigration>,
    /// Tree with branch lengths and counts filled in
    pub tree: PhyloTree,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Validated run configuration
    config: Configuration,
    /// Rate specifications, `None` when counts are not simulated
    rates: Option<RateConfig>,
    /// Branch-length sampler built once from the configuration
    branch_lengths: ContinuousSampler,
    /// Random number generator shared by every stage of every sample
    rng: SimRng,
    /// Seed the generator was created from
    seed: u64,
    /// Number of samples produced so far
    generated: usize,
}

impl Simulation {
    /// Create a simulation seeded from the configuration.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        let seed = config.seed;
        Self::with_seed(config, seed)
    }

    /// Create a simulation with an explicit seed.
    ///
    /// `None` draws a fresh seed from the operating system; the seed actually
    /// used is available through [`Simulation::seed`].
    pub fn with_seed(config: Configuration, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let rates = config.rates()?;
        let branch_lengths = config
            .branch_length_distribution
            .sampler()
            .map_err(|reason| ConfigError::InvalidDistribution {
                name: "branch-length",
                reason,
            })?;

        let (rng, seed) = rng_from_optional_seed(seed);
        info!("Initialised simulation with seed {seed}");
        if rates.is_none() {
            info!("No rates configured, counts will not be simulated");
        }

        Ok(Self {
            config,
            rates,
            branch_lengths,
            rng,
            seed,
            generated: 0,
        })
    }

    /// The seed the generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Total number of samples in the batch.
    pub fn sample_count(&self) -> usize {
        self.config.sample_count()
    }

    /// Number of samples produced so far.
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Whether every sample of the batch has been produced.
    pub fn is_finished(&self) -> bool {
        self.generated >= self.sample_count()
    }

    /// Produce the next sample, or `None` once the batch is exhausted.
    pub fn next_sample(&mut self) -> Option<Result<Sample, SimulationError>> {
        if self.is_finished() {
            return None;
        }
        let index = self.generated;
        self.generated += 1;
        Some(self.generate_sample(index))
    }

    /// Iterate over the remaining samples of the batch.
    ///
    /// The iterator stops after the first error.
    pub fn samples(&mut self) -> Samples<'_> {
        Samples {
            simulation: self,
            failed: false,
        }
    }

    fn generate_sample(&mut self, index: usize) -> Result<Sample, SimulationError> {
        let rates = match &self.rates {
            Some(rates) => Some(rates.resolve(&mut self.rng)?),
            None => None,
        };
        if let Some(model) = &rates {
            info!(
                "Sample {index}: lambda = {}, mu = {}, m = {}",
                model.lambda, model.mu, model.m
            );
        }

        let mut tree = generate_random_topology(
            self.config.number_of_species,
            self.config.number_of_sites,
            &mut self.rng,
        )?;
        assign_branch_lengths(&mut tree, &self.branch_lengths, &mut self.rng);
        debug!(
            "Sample {index}: {} nodes, {} edges",
            tree.node_count(),
            tree.edge_count()
        );

        if let Some(model) = &rates {
            let root_states = burn_in_root_states(
                model,
                &self.config.burn_in,
                self.config.number_of_sites,
                &mut self.rng,
            )?;
            propagate_counts(&mut tree, model, &root_states, &mut self.rng)?;
        }

        info!("Sample {index} complete");
        Ok(Sample { index, rates, tree })
    }
}

/// Iterator over the remaining samples of a [`Simulation`].
pub struct Samples<'a> {
    simulation: &'a mut Simulation,
    failed: bool,
}

impl Iterator for Samples<'_> {
    type Item = Result<Sample, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.simulation.next_sample()?;
        self.failed = item.is_err();
        Some(item)
    }
}
