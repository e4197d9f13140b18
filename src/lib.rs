//! Simulated annealing for the 0/1 knapsack problem.
//!
//! Picks a subset of a fixed item catalogue that maximizes total value
//! without exceeding a weight limit and a volume limit. The crate splits
//! into two layers:
//!
//! - **`sa`**: the annealing machinery — cooling schedules, the Metropolis
//!   acceptance criterion, and the temperature-driven search loop, generic
//!   over an [`sa::SaProblem`].
//! - **`knapsack`**: the domain — the item catalogue, the bit-vector
//!   solution encoding, the penalized reward function, and the single-flip
//!   neighbourhood, plus a delimited-file catalogue loader.
//!
//! # Example
//!
//! ```
//! use knapsack_anneal::knapsack::{Item, KnapsackProblem};
//! use knapsack_anneal::sa::{CoolingSchedule, SaConfig, SaRunner};
//!
//! let problem = KnapsackProblem::new(
//!     vec![
//!         Item::new("tent", 10, 5, 4),
//!         Item::new("stove", 6, 4, 3),
//!         Item::new("canoe", 12, 8, 7),
//!     ],
//!     16, // max weight
//!     13, // max volume
//! );
//!
//! let config = SaConfig::default()
//!     .with_initial_temperature(1000.0)
//!     .with_end_temperature(0.01)
//!     .with_cooling(CoolingSchedule::Geometric { rate: 0.999 })
//!     .with_seed(7);
//!
//! let initial = vec![false; problem.len()];
//! let result = SaRunner::run(&problem, initial, &config).unwrap();
//!
//! assert_eq!(result.solution.len(), problem.len());
//! assert!(result.final_temperature <= 0.01);
//! ```

pub mod knapsack;
pub mod sa;
