//! Model parameters and their per-sample resolution.
//!
//! Rates are configured as [`ParameterSpec`]s and resolved to concrete
//! values once per sample, drawing from the run's generator.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::ParameterSpec;
use crate::errors::{ConfigError, SimulationError};
use crate::evolution::BirthDeathImmigration;

/// Starting state of the root burn-in run.
pub const DEFAULT_BURN_IN_STATE: u64 = 500;
/// Length of the root burn-in run.
pub const DEFAULT_BURN_IN_TIME: f64 = 1000.0;

/// Burn-in used to draw the root's count for every site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BurnIn {
    /// State the burn-in chain starts from
    #[serde(default = "default_burn_in_state")]
    pub initial_state: u64,
    /// How long the burn-in chain runs
    #[serde(default = "default_burn_in_time")]
    pub time: f64,
}

fn default_burn_in_state() -> u64 {
    DEFAULT_BURN_IN_STATE
}

fn default_burn_in_time() -> f64 {
    DEFAULT_BURN_IN_TIME
}

impl Default for BurnIn {
    fn default() -> Self {
        Self {
            initial_state: DEFAULT_BURN_IN_STATE,
            time: DEFAULT_BURN_IN_TIME,
        }
    }
}

impl BurnIn {
    pub fn new(initial_state: u64, time: f64) -> Self {
        Self {
            initial_state,
            time,
        }
    }
}

/// The three rates of the count model, as configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConfig {
    /// Per-copy birth rate
    pub lambda: ParameterSpec,
    /// Per-copy death rate
    pub mu: ParameterSpec,
    /// Immigration rate
    pub m: ParameterSpec,
}

impl RateConfig {
    pub fn new(
        lambda: impl Into<ParameterSpec>,
        mu: impl Into<ParameterSpec>,
        m: impl Into<ParameterSpec>,
    ) -> Self {
        Self {
            lambda: lambda.into(),
            mu: mu.into(),
            m: m.into(),
        }
    }

    /// Group optional rates. All three or none must be present.
    pub fn from_parts(
        lambda: Option<ParameterSpec>,
        mu: Option<ParameterSpec>,
        m: Option<ParameterSpec>,
    ) -> Result<Option<Self>, ConfigError> {
        match (lambda, mu, m) {
            (Some(lambda), Some(mu), Some(m)) => Ok(Some(Self { lambda, mu, m })),
            (None, None, None) => Ok(None),
            _ => Err(ConfigError::IncompleteRates),
        }
    }

    /// Check that every random rate has a usable distribution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, spec) in [("lambda", &self.lambda), ("mu", &self.mu), ("m", &self.m)] {
            spec.validate()
                .map_err(|reason| ConfigError::InvalidDistribution { name, reason })?;
        }
        Ok(())
    }

    /// Draw concrete rates for one sample.
    ///
    /// Draws happen in the order lambda, mu, m. `mu` is raised to `lambda`
    /// when the draw falls below it, so the process is never supercritical.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BirthDeathImmigration, SimulationError> {
        let lambda = self.lambda.resolve(rng).map_err(SimulationError::Distribution)?;
        let drawn_mu = self.mu.resolve(rng).map_err(SimulationError::Distribution)?;
        let mu = drawn_mu.max(lambda);
        if mu != drawn_mu {
            debug!("raised mu from {drawn_mu} to lambda = {lambda}");
        }
        let m = self.m.resolve(rng).map_err(SimulationError::Distribution)?;

        Ok(BirthDeathImmigration::new(lambda, mu, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::rng::seeded_rng;
    use crate::base::ContinuousDistribution;

    #[test]
    fn test_fixed_rates_resolve_unchanged() {
        let rates = RateConfig::new(0.2, 0.5, 1.5);
        let model = rates.resolve(&mut seeded_rng(1)).unwrap();
        assert_eq!(model, BirthDeathImmigration::new(0.2, 0.5, 1.5));
    }

    #[test]
    fn test_mu_raised_to_lambda() {
        let rates = RateConfig::new(0.8, 0.3, 1.0);
        let model = rates.resolve(&mut seeded_rng(1)).unwrap();
        assert_eq!(model.mu, 0.8);
    }

    #[test]
    fn test_random_mu_never_below_lambda() {
        let rates = RateConfig::new(
            ContinuousDistribution::Uniform {
                lower: 0.0,
                upper: 1.0,
            },
            ContinuousDistribution::Uniform {
                lower: 0.0,
                upper: 1.0,
            },
            2.0,
        );
        let mut rng = seeded_rng(2);
        for _ in 0..500 {
            let model = rates.resolve(&mut rng).unwrap();
            assert!(model.mu >= model.lambda);
            assert_eq!(model.m, 2.0);
        }
    }

    #[test]
    fn test_partial_rates_rejected() {
        assert!(RateConfig::from_parts(None, None, None).unwrap().is_none());
        assert!(matches!(
            RateConfig::from_parts(Some(1.0.into()), None, Some(1.0.into())),
            Err(ConfigError::IncompleteRates)
        ));
    }

    #[test]
    fn test_validate_names_bad_rate() {
        let rates = RateConfig::new(
            0.1,
            ContinuousDistribution::Normal {
                mean: 1.0,
                standard_deviation: -1.0,
            },
            1.0,
        );
        match rates.validate() {
            Err(ConfigError::InvalidDistribution { name, .. }) => assert_eq!(name, "mu"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_burn_in_defaults() {
        let burn_in: BurnIn = serde_yaml::from_str("time: 10.0").unwrap();
        assert_eq!(burn_in, BurnIn::new(DEFAULT_BURN_IN_STATE, 10.0));
        assert_eq!(BurnIn::default().time, DEFAULT_BURN_IN_TIME);
    }
}
