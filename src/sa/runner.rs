//! SA execution loop.

use super::config::{ConfigError, SaConfig};
use super::types::{SaProblem, ShapeMismatch};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Failure modes of an annealing run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The starting solution does not fit the problem.
    #[error(transparent)]
    Shape(#[from] ShapeMismatch),

    /// The defensive iteration cap ran out while the temperature was still
    /// above the end temperature.
    #[error("no termination after {iterations} iterations, temperature still at {temperature}")]
    NonTermination {
        /// Iterations executed before giving up.
        iterations: usize,
        /// Temperature at the time the cap was hit.
        temperature: f64,
    },
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The solution held when the loop terminated.
    pub solution: S,

    /// Reward of `solution`, recomputed at exit.
    pub reward: f64,

    /// The highest-reward solution visited during the run.
    pub best: S,

    /// Reward of `best`.
    pub best_reward: f64,

    /// Total number of iterations (neighbour evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped; at most the configured end
    /// temperature.
    pub final_temperature: f64,
}

/// Executes the annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial` until the temperature falls to the configured
    /// end temperature.
    ///
    /// Each iteration draws one neighbour, evaluates the rewards of the
    /// neighbour and of the current solution, applies the Metropolis
    /// criterion, and cools. The temperature drops once per iteration
    /// whether or not the move was accepted.
    ///
    /// # Errors
    ///
    /// [`SaError::Config`] and [`SaError::Shape`] are raised before the
    /// first iteration. [`SaError::NonTermination`] is raised when
    /// `config.max_iterations` is non-zero and runs out while the
    /// temperature is still above the end temperature.
    ///
    /// # Termination
    ///
    /// With `max_iterations == 0`, additive cooling always terminates, and
    /// geometric cooling terminates whenever `end_temperature > 0`. A
    /// geometric schedule combined with an end temperature of exactly zero
    /// never gets there; supplying such a configuration without a cap is
    /// the caller's hazard.
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, SaError> {
        config.validate()?;
        problem.check_start(&initial)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = initial;
        let mut best = current.clone();
        let mut best_reward = problem.reward(&best);

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        tracing::debug!(
            initial_temperature = config.initial_temperature,
            end_temperature = config.end_temperature,
            "annealing started"
        );

        while temperature > config.end_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                return Err(SaError::NonTermination {
                    iterations,
                    temperature,
                });
            }

            let neighbor = problem.neighbor(&current, &mut rng);
            let neighbor_reward = problem.reward(&neighbor);
            let delta = neighbor_reward - problem.reward(&current);

            if delta > 0.0 {
                improving_moves += 1;
            }
            if metropolis(delta, temperature, &mut rng) {
                current = neighbor;
                accepted_moves += 1;

                if neighbor_reward > best_reward {
                    best = current.clone();
                    best_reward = neighbor_reward;
                }
            }

            temperature = config.cooling.next(temperature);
            iterations += 1;
        }

        let reward = problem.reward(&current);

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            reward,
            "annealing finished"
        );

        Ok(SaResult {
            solution: current,
            reward,
            best,
            best_reward,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}

/// Metropolis acceptance criterion.
///
/// Improvements are always taken; a worsening or equal move is taken with
/// probability `exp(delta / temperature)`. A zero delta therefore always
/// accepts, which lets the walk drift across equal-reward plateaus.
/// Requires `temperature > 0`; the loop condition guarantees it.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta > 0.0 {
        true
    } else {
        rng.random_range(0.0..1.0) <= (delta / temperature).exp()
    }
}
