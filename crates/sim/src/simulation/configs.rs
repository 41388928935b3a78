//! Run configuration.
//!
//! A [`Configuration`] is read from a YAML document and fully describes a
//! batch of samples: the tree size, the branch-length distribution, the
//! count model and the seed.
//!
//! ```yaml
//! seed: 42
//! branch-length-distribution:
//!   uniform: { lower: 0.1, upper: 1.0 }
//! lambda: 0.2
//! mu: { uniform: { lower: 0.5, upper: 1.0 } }
//! m: { normal: { mean: 2.0, standard-deviation: 0.1 } }
//! number-of-species: 10
//! number-of-sites: 100
//! number-of-samples: 3
//! ```
//!
//! `lambda`, `mu` and `m` may all be left out, in which case no counts are
//! simulated and every count stays 0.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::base::{ContinuousDistribution, ParameterSpec};
use crate::errors::ConfigError;
use crate::simulation::parameters::{BurnIn, RateConfig};

/// The master configuration of a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Configuration {
    /// Optional RNG seed for reproducibility; negative values wrap to `u64`
    #[serde(default, deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
    /// Distribution every branch length is drawn from
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub branch_length_distribution: ContinuousDistribution,
    /// Per-copy birth rate
    #[serde(default)]
    pub lambda: Option<ParameterSpec>,
    /// Per-copy death rate
    #[serde(default)]
    pub mu: Option<ParameterSpec>,
    /// Immigration rate
    #[serde(default)]
    pub m: Option<ParameterSpec>,
    /// Number of leaves
    pub number_of_species: usize,
    /// Number of independent sites per node
    pub number_of_sites: usize,
    /// Number of trees to generate; absent means a single unsuffixed output
    #[serde(default)]
    pub number_of_samples: Option<usize>,
    /// Root burn-in settings
    #[serde(default)]
    pub burn_in: BurnIn,
}

impl Configuration {
    /// Load and validate a configuration file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse and validate a configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and distributions without drawing anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_species == 0 {
            return Err(ConfigError::InvalidParameter(
                "number-of-species must be at least 1".to_string(),
            ));
        }

        self.branch_length_distribution
            .sampler()
            .map_err(|reason| ConfigError::InvalidDistribution {
                name: "branch-length",
                reason,
            })?;

        if let Some(rates) = self.rates()? {
            rates.validate()?;
        }

        if !self.burn_in.time.is_finite() {
            return Err(ConfigError::InvalidParameter(format!(
                "burn-in time must be finite (got {})",
                self.burn_in.time
            )));
        }

        Ok(())
    }

    /// The count model rates, or `None` when count simulation is disabled.
    pub fn rates(&self) -> Result<Option<RateConfig>, ConfigError> {
        RateConfig::from_parts(self.lambda, self.mu, self.m)
    }

    /// Whether k-word counts are simulated.
    pub fn simulates_counts(&self) -> bool {
        self.lambda.is_some() && self.mu.is_some() && self.m.is_some()
    }

    /// Number of samples the run produces.
    pub fn sample_count(&self) -> usize {
        self.number_of_samples.unwrap_or(1)
    }

    /// A commented example configuration.
    pub fn example_yaml() -> &'static str {
        EXAMPLE_YAML
    }
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seed {
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<Seed>::deserialize(deserializer)?.map(|seed| match seed {
        Seed::Unsigned(value) => value,
        Seed::Signed(value) => value as u64,
    }))
}

const EXAMPLE_YAML: &str = "\
# kwtree configuration

# RNG seed. Remove it to draw a fresh seed for every run.
seed: 42

# Every branch length is drawn from this distribution:
#   uniform: { lower: <f64>, upper: <f64> }
#   normal: { mean: <f64>, standard-deviation: <f64> }
branch-length-distribution:
  uniform: { lower: 0.1, upper: 1.0 }

# Birth-death-immigration rates, drawn once per sample. Each is a number,
# a uniform or a normal distribution. Leave all three out to skip counts.
lambda: 0.2
mu:
  uniform: { lower: 0.5, upper: 1.0 }
m:
  normal: { mean: 2.0, standard-deviation: 0.1 }

number-of-species: 10
number-of-sites: 100

# Write <output>-0 ... <output>-(n-1). Leave out for a single file.
number-of-samples: 3

# Root counts come from running the chain from initial-state for time units.
burn-in:
  initial-state: 500
  time: 1000.0
";
