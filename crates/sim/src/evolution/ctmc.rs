//! Birth-death-immigration continuous-time Markov chain.
//!
//! The state is a non-negative copy number `x`. Each copy is born at rate
//! `lambda` and dies at rate `mu`, and new copies immigrate at the constant
//! rate `m`:
//!
//! - birth: `x -> x + 1` at rate `x * lambda + m`
//! - death: `x -> x - 1` at rate `x * mu`
//!
//! Trajectories are sampled exactly with the Gillespie algorithm: draw an
//! exponential holding time at the total rate, then pick birth or death in
//! proportion to their rates.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Exp};

use crate::errors::SimulationError;

/// Rates of a birth-death-immigration process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthDeathImmigration {
    /// Per-copy birth rate.
    pub lambda: f64,
    /// Per-copy death rate.
    pub mu: f64,
    /// Immigration rate.
    pub m: f64,
}

/// Result of one simulated trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trajectory {
    /// State at the end of the time budget.
    pub state: u64,
    /// Number of jumps executed before the budget ran out.
    pub transitions: u64,
}

impl BirthDeathImmigration {
    pub fn new(lambda: f64, mu: f64, m: f64) -> Self {
        Self { lambda, mu, m }
    }

    #[inline]
    pub fn birth_rate(&self, state: u64) -> f64 {
        state as f64 * self.lambda + self.m
    }

    #[inline]
    pub fn death_rate(&self, state: u64) -> f64 {
        state as f64 * self.mu
    }

    #[inline]
    pub fn total_rate(&self, state: u64) -> f64 {
        self.birth_rate(state) + self.death_rate(state)
    }

    /// Run the chain from `initial_state` for `time` units.
    ///
    /// The trajectory is right-censored: the first jump whose time would
    /// reach or pass `time` is not executed. A non-positive `time` returns
    /// the initial state without consuming randomness. There is no cap on
    /// the number of jumps other than the time budget.
    ///
    /// # Errors
    /// - [`SimulationError::ZeroTotalRate`] if the chain reaches a state with
    ///   no outgoing rate before the budget is spent (e.g. `m = 0` at `x = 0`).
    /// - [`SimulationError::InvalidRate`] if the rates are negative or NaN.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        initial_state: u64,
        time: f64,
        rng: &mut R,
    ) -> Result<Trajectory, SimulationError> {
        let mut state = initial_state;
        let mut elapsed = 0.0;
        let mut transitions = 0;

        loop {
            if elapsed >= time {
                break;
            }

            let total = self.total_rate(state);
            if total == 0.0 {
                return Err(SimulationError::ZeroTotalRate {
                    state,
                    elapsed,
                    time,
                });
            }

            let holding = Exp::new(total)
                .map_err(|e| {
                    SimulationError::InvalidRate(format!("total rate {total} at state {state}: {e}"))
                })?
                .sample(rng);
            if elapsed + holding >= time {
                break;
            }
            elapsed += holding;

            let p_birth = self.birth_rate(state) / total;
            let birth = Bernoulli::new(p_birth)
                .map_err(|e| {
                    SimulationError::InvalidRate(format!(
                        "birth probability {p_birth} at state {state}: {e}"
                    ))
                })?
                .sample(rng);

            if birth {
                state += 1;
            } else {
                // death rate is 0 at state 0, so p_birth == 1 there
                state -= 1;
            }
            transitions += 1;
        }

        Ok(Trajectory { state, transitions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::rng::seeded_rng;

    #[test]
    fn test_zero_time_returns_initial_state() {
        let model = BirthDeathImmigration::new(0.0, 0.0, 5.0);
        let mut rng = seeded_rng(1);
        let untouched = rng.clone();

        let result = model.simulate(10, 0.0, &mut rng).unwrap();
        assert_eq!(
            result,
            Trajectory {
                state: 10,
                transitions: 0
            }
        );
        assert_eq!(rng, untouched);
    }

    #[test]
    fn test_rates() {
        let model = BirthDeathImmigration::new(0.5, 0.75, 2.0);
        assert_eq!(model.birth_rate(4), 4.0);
        assert_eq!(model.death_rate(4), 3.0);
        assert_eq!(model.total_rate(4), 7.0);
        assert_eq!(model.total_rate(0), 2.0);
    }

    #[test]
    fn test_state_never_negative() {
        let mut rng = seeded_rng(99);
        let cases = [
            (0.0, 1.0, 0.5, 0),
            (0.2, 5.0, 0.1, 3),
            (1.0, 1.0, 1.0, 50),
            (0.0, 10.0, 2.0, 100),
        ];
        for (lambda, mu, m, x0) in cases {
            let model = BirthDeathImmigration::new(lambda, mu, m);
            for _ in 0..200 {
                let result = model.simulate(x0, 3.0, &mut rng).unwrap();
                // u64 cannot go negative; an underflow would have panicked in debug
                assert!(result.state < 10_000);
            }
        }
    }

    #[test]
    fn test_zero_total_rate_is_error() {
        let model = BirthDeathImmigration::new(0.0, 0.0, 0.0);
        let mut rng = seeded_rng(2);
        let err = model.simulate(5, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::ZeroTotalRate { state: 5, .. }));
    }

    #[test]
    fn test_extinction_without_immigration_is_error() {
        // pure death drives the state to 0, where nothing can happen
        let model = BirthDeathImmigration::new(0.0, 5.0, 0.0);
        let mut rng = seeded_rng(3);
        let err = model.simulate(2, 1_000.0, &mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::ZeroTotalRate { state: 0, .. }));
    }

    #[test]
    fn test_negative_rate_is_error() {
        let model = BirthDeathImmigration::new(-2.0, 0.0, 1.0);
        let mut rng = seeded_rng(4);
        assert!(matches!(
            model.simulate(3, 1.0, &mut rng),
            Err(SimulationError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_immigration_only_is_poisson() {
        // lambda = mu = 0: the count after T is x0 + Poisson(m * T)
        let model = BirthDeathImmigration::new(0.0, 0.0, 2.0);
        let mut rng = seeded_rng(5);
        let n = 4_000;
        let mut total = 0u64;
        for _ in 0..n {
            let result = model.simulate(0, 5.0, &mut rng).unwrap();
            assert_eq!(result.state, result.transitions);
            total += result.state;
        }
        let mean = total as f64 / n as f64;
        assert!((mean - 10.0).abs() < 0.3, "mean was {mean}");
    }

    #[test]
    fn test_transition_count_matches_path() {
        let model = BirthDeathImmigration::new(0.3, 0.5, 1.0);
        let mut rng = seeded_rng(6);
        for _ in 0..100 {
            let result = model.simulate(20, 2.0, &mut rng).unwrap();
            // each jump moves the state by exactly one
            assert!(result.state.abs_diff(20) <= result.transitions);
            assert_eq!((result.state + 20 + result.transitions) % 2, 0);
        }
    }
}
