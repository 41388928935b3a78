//! Configured distributions for rates and branch lengths.
//!
//! A configuration names either a fixed scalar or a distribution to draw
//! from. Both shapes are closed enums, so a "uniform" with a mean or a
//! "normal" with bounds cannot be expressed.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

/// A continuous distribution as written in the configuration.
///
/// In YAML this is a single-key map:
///
/// ```yaml
/// uniform: { lower: 0.5, upper: 1.5 }
/// # or
/// normal: { mean: 1.0, standard-deviation: 0.2 }
/// ```
///
/// `serde_yaml` only reads that shape through
/// `serde_yaml::with::singleton_map`, which every field holding this type
/// uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
pub enum ContinuousDistribution {
    /// Uniform on the closed interval `[lower, upper]`.
    Uniform { lower: f64, upper: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal {
        mean: f64,
        #[serde(rename = "standard-deviation")]
        standard_deviation: f64,
    },
}

impl ContinuousDistribution {
    /// Build a reusable sampler.
    ///
    /// The closed uniform interval allows `lower == upper`, which yields a
    /// constant. Bounds in the wrong order and non-finite values are
    /// rejected by the underlying distributions; a negative standard
    /// deviation is rejected here.
    pub fn sampler(&self) -> Result<ContinuousSampler, String> {
        match *self {
            Self::Normal {
                mean,
                standard_deviation,
            } if standard_deviation < 0.0 => Err(format!(
                "normal({mean}, {standard_deviation}): standard deviation is negative"
            )),
            Self::Uniform { lower, upper } => Uniform::new_inclusive(lower, upper)
                .map(ContinuousSampler::Uniform)
                .map_err(|e| format!("uniform({lower}, {upper}): {e}")),
            Self::Normal {
                mean,
                standard_deviation,
            } => Normal::new(mean, standard_deviation)
                .map(ContinuousSampler::Normal)
                .map_err(|e| format!("normal({mean}, {standard_deviation}): {e}")),
        }
    }
}

impl fmt::Display for ContinuousDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform { lower, upper } => write!(f, "Uniform[{lower}, {upper}]"),
            Self::Normal {
                mean,
                standard_deviation,
            } => write!(f, "Normal(mean={mean}, sd={standard_deviation})"),
        }
    }
}

/// Sampler built from a [`ContinuousDistribution`].
#[derive(Debug, Clone, Copy)]
pub enum ContinuousSampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Distribution<f64> for ContinuousSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Uniform(d) => d.sample(rng),
            Self::Normal(d) => d.sample(rng),
        }
    }
}

/// A model parameter: either fixed, or drawn once per sample.
///
/// ```yaml
/// lambda: 0.5
/// mu: { uniform: { lower: 0.5, upper: 1.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterSpec {
    Fixed(f64),
    Random(#[serde(with = "serde_yaml::with::singleton_map")] ContinuousDistribution),
}

impl ParameterSpec {
    /// Check that a value can be drawn, without drawing it.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Fixed(_) => Ok(()),
            Self::Random(dist) => dist.sampler().map(|_| ()),
        }
    }

    /// Resolve to a concrete value. Fixed values consume no randomness.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, String> {
        match self {
            Self::Fixed(value) => Ok(*value),
            Self::Random(dist) => Ok(dist.sampler()?.sample(rng)),
        }
    }
}

impl From<f64> for ParameterSpec {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<ContinuousDistribution> for ParameterSpec {
    fn from(dist: ContinuousDistribution) -> Self {
        Self::Random(dist)
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Random(dist) => write!(f, "{dist}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::rng::seeded_rng;

    #[test]
    fn test_degenerate_uniform_is_constant() {
        let sampler = ContinuousDistribution::Uniform {
            lower: 1.0,
            upper: 1.0,
        }
        .sampler()
        .unwrap();
        let mut rng = seeded_rng(1);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), 1.0);
        }
    }

    #[test]
    fn test_uniform_stays_in_bounds() {
        let sampler = ContinuousDistribution::Uniform {
            lower: 0.25,
            upper: 0.75,
        }
        .sampler()
        .unwrap();
        let mut rng = seeded_rng(2);
        for _ in 0..1000 {
            let x = sampler.sample(&mut rng);
            assert!((0.25..=0.75).contains(&x));
        }
    }

    #[test]
    fn test_reversed_uniform_rejected() {
        let dist = ContinuousDistribution::Uniform {
            lower: 2.0,
            upper: 1.0,
        };
        assert!(dist.sampler().is_err());
        assert!(ParameterSpec::Random(dist).validate().is_err());
    }

    #[test]
    fn test_normal_mean() {
        let sampler = ContinuousDistribution::Normal {
            mean: 3.0,
            standard_deviation: 0.5,
        }
        .sampler()
        .unwrap();
        let mut rng = seeded_rng(3);
        let n = 10_000;
        let mean: f64 = (0..n).map(|_| sampler.sample(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 3.0).abs() < 0.05, "mean was {mean}");
    }

    #[test]
    fn test_fixed_parameter_consumes_no_randomness() {
        let mut a = seeded_rng(4);
        let mut b = seeded_rng(4);
        assert_eq!(ParameterSpec::Fixed(0.3).resolve(&mut a).unwrap(), 0.3);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    fn parse_distribution(yaml: &str) -> Result<ContinuousDistribution, serde_yaml::Error> {
        serde_yaml::with::singleton_map::deserialize(serde_yaml::Deserializer::from_str(yaml))
    }

    #[test]
    fn test_negative_standard_deviation_rejected() {
        let dist = ContinuousDistribution::Normal {
            mean: 1.0,
            standard_deviation: -1.0,
        };
        assert!(dist.sampler().is_err());
        assert!(ParameterSpec::Random(dist).validate().is_err());

        let zero = ContinuousDistribution::Normal {
            mean: 1.0,
            standard_deviation: 0.0,
        };
        assert_eq!(zero.sampler().unwrap().sample(&mut seeded_rng(5)), 1.0);
    }

    #[test]
    fn test_yaml_shapes() {
        let fixed: ParameterSpec = serde_yaml::from_str("5").unwrap();
        assert_eq!(fixed, ParameterSpec::Fixed(5.0));

        let uniform: ParameterSpec =
            serde_yaml::from_str("uniform: { lower: 1, upper: 2.5 }").unwrap();
        assert_eq!(
            uniform,
            ParameterSpec::Random(ContinuousDistribution::Uniform {
                lower: 1.0,
                upper: 2.5
            })
        );

        let normal = parse_distribution("normal: { mean: 0.0, standard-deviation: 1.0 }").unwrap();
        assert_eq!(
            normal,
            ContinuousDistribution::Normal {
                mean: 0.0,
                standard_deviation: 1.0
            }
        );

        let random_normal: ParameterSpec =
            serde_yaml::from_str("normal: { mean: 2.0, standard-deviation: 0.1 }").unwrap();
        assert_eq!(
            random_normal,
            ParameterSpec::Random(ContinuousDistribution::Normal {
                mean: 2.0,
                standard_deviation: 0.1
            })
        );

        assert!(parse_distribution("gamma: { shape: 1 }").is_err());
        assert!(parse_distribution("uniform: { lower: 1 }").is_err());
        assert!(parse_distribution("uniform: { lower: 1, upper: 2, mean: 0 }").is_err());
        assert!(parse_distribution("0.5").is_err());
        assert!(serde_yaml::from_str::<ParameterSpec>("gamma: { shape: 1 }").is_err());
    }
}
