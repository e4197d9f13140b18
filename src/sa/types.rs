//! Core trait for the annealing loop.

use rand::Rng;
use thiserror::Error;

/// A caller-supplied starting solution does not fit the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("starting solution has {actual} entries, the problem expects {expected}")]
pub struct ShapeMismatch {
    /// Number of entries the problem expects.
    pub expected: usize,
    /// Number of entries the solution actually has.
    pub actual: usize,
}

/// Defines a problem for the annealing loop.
///
/// The user implements reward evaluation and neighbour generation. The SA
/// framework handles temperature management, the acceptance criterion,
/// and cooling.
///
/// # Maximization
///
/// The loop maximizes the reward. For minimization, negate the objective.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::SaProblem;
/// use rand::Rng;
///
/// /// Maximize the number of set bits.
/// struct OneMax;
///
/// impl SaProblem for OneMax {
///     type Solution = Vec<bool>;
///
///     fn reward(&self, bits: &Vec<bool>) -> f64 {
///         bits.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut next = bits.clone();
///         let i = rng.random_range(0..next.len());
///         next[i] = !next[i];
///         next
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Checks a caller-supplied starting solution.
    ///
    /// Runs once, before the first iteration. The default accepts any
    /// solution; problems with a fixed dimension override it.
    fn check_start(&self, _solution: &Self::Solution) -> Result<(), ShapeMismatch> {
        Ok(())
    }

    /// Computes the reward of a solution. Higher is better.
    ///
    /// Must be total: every solution of the right shape yields a value,
    /// feasible or not.
    fn reward(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbour of the current solution.
    ///
    /// The neighbour should be a small perturbation of the input, and the
    /// neighbourhood must be connected (any solution reachable from any
    /// other via a sequence of moves). The input is left untouched.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
