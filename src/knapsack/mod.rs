//! The 0/1 knapsack domain.
//!
//! An ordered item catalogue with a weight limit and a volume limit, a
//! bit-vector solution encoding, and the reward/neighbourhood pair that
//! plugs the problem into the annealing loop. Feasible packings score
//! their total value, infeasible ones are penalized by their combined
//! load. The sole move operator flips a single bit.

pub mod catalogue;

use rand::Rng;

use crate::sa::{SaProblem, ShapeMismatch};

/// One entry of the item catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Value gained by packing the item.
    pub value: i64,
    /// Weight the item adds to the pack.
    pub weight: i64,
    /// Volume the item adds to the pack.
    pub volume: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: i64, weight: i64, volume: i64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
            volume,
        }
    }
}

/// Candidate packing: `true` at index i ⟺ item i of the catalogue is packed.
///
/// Every solution the optimizer sees has length equal to the catalogue size;
/// the positional correspondence between bits and items holds end-to-end.
pub type Solution = Vec<bool>;

/// A knapsack instance: the item catalogue plus the two capacity limits.
///
/// Read-only once constructed. Items keep their catalogue order, so bit i
/// of every [`Solution`] refers to `items()[i]`.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    max_weight: i64,
    max_volume: i64,
}

struct Load {
    value: i64,
    weight: i64,
    volume: i64,
}

impl KnapsackProblem {
    /// Creates an instance.
    ///
    /// The catalogue must be non-empty: neighbour generation draws a random
    /// item index and is undefined for a zero-item catalogue.
    pub fn new(items: Vec<Item>, max_weight: i64, max_volume: i64) -> Self {
        Self {
            items,
            max_weight,
            max_volume,
        }
    }

    /// The item catalogue, in solution-bit order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items, which is also the solution length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_weight(&self) -> i64 {
        self.max_weight
    }

    pub fn max_volume(&self) -> i64 {
        self.max_volume
    }

    /// Uniformly random packing of the right length: each item is packed
    /// with probability 1/2, independently.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        (0..self.items.len()).map(|_| rng.random()).collect()
    }

    /// The packed items, in catalogue order.
    pub fn packed<'a>(&'a self, solution: &'a [bool]) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .zip(solution)
            .filter_map(|(item, &packed)| packed.then_some(item))
    }

    fn load(&self, solution: &[bool]) -> Load {
        let mut load = Load {
            value: 0,
            weight: 0,
            volume: 0,
        };
        for (item, &packed) in self.items.iter().zip(solution) {
            if packed {
                load.value += item.value;
                load.weight += item.weight;
                load.volume += item.volume;
            }
        }
        load
    }
}

impl SaProblem for KnapsackProblem {
    type Solution = Vec<bool>;

    fn check_start(&self, solution: &Vec<bool>) -> Result<(), ShapeMismatch> {
        if solution.len() != self.items.len() {
            return Err(ShapeMismatch {
                expected: self.items.len(),
                actual: solution.len(),
            });
        }
        Ok(())
    }

    /// Total value of the packed items when both limits are respected.
    /// Otherwise the negated sum of packed weight and volume, so every
    /// infeasible packing ranks at or below zero and sinks further the more
    /// it overshoots. Total over all bit vectors of the right length.
    fn reward(&self, solution: &Vec<bool>) -> f64 {
        let load = self.load(solution);
        if load.weight > self.max_weight || load.volume > self.max_volume {
            -((load.weight + load.volume) as f64)
        } else {
            load.value as f64
        }
    }

    /// Flips one uniformly chosen bit of a copy; the input is untouched.
    fn neighbor<R: Rng>(&self, solution: &Vec<bool>, rng: &mut R) -> Vec<bool> {
        let mut next = solution.clone();
        let idx = rng.random_range(0..next.len());
        next[idx] = !next[idx];
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{CoolingSchedule, SaConfig, SaError, SaRunner};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn camping() -> KnapsackProblem {
        KnapsackProblem::new(
            vec![
                Item::new("tent", 10, 5, 4),
                Item::new("stove", 6, 4, 3),
                Item::new("canoe", 12, 8, 7),
            ],
            16,
            13,
        )
    }

    /// Deterministic instance for property tests, sized to the solution.
    fn synthetic(n: usize) -> KnapsackProblem {
        let items = (0..n)
            .map(|i| {
                Item::new(
                    format!("item-{i}"),
                    (i % 7) as i64,
                    (i % 5) as i64 + 1,
                    (i % 3) as i64 + 1,
                )
            })
            .collect();
        KnapsackProblem::new(items, n as i64, n as i64)
    }

    #[test]
    fn test_reward_overweight_is_negated_load() {
        // 5 + 4 + 8 = 17 > 16, volume 14 > 13; penalty -(17 + 14).
        let problem = camping();
        assert_eq!(problem.reward(&vec![true, true, true]), -31.0);
    }

    #[test]
    fn test_reward_empty_pack_is_zero() {
        let problem = camping();
        assert_eq!(problem.reward(&vec![false, false, false]), 0.0);
    }

    #[test]
    fn test_reward_feasible_is_value_sum() {
        let problem = camping();
        assert_eq!(problem.reward(&vec![true, true, false]), 16.0);
        assert_eq!(problem.reward(&vec![true, false, true]), 22.0);
    }

    #[test]
    fn test_reward_volume_overflow_alone_penalizes() {
        let problem = KnapsackProblem::new(
            vec![Item::new("down", 5, 1, 10), Item::new("parka", 5, 1, 10)],
            10,
            15,
        );
        // Weight 2 fits, volume 20 does not; penalty -(2 + 20).
        assert_eq!(problem.reward(&vec![true, true]), -22.0);
    }

    #[test]
    fn test_neighbor_flips_exactly_one_bit() {
        let problem = camping();
        let mut rng = StdRng::seed_from_u64(7);
        let current = vec![true, false, true];

        for _ in 0..50 {
            let next = problem.neighbor(&current, &mut rng);
            assert_eq!(next.len(), current.len());
            let flipped = current
                .iter()
                .zip(&next)
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(flipped, 1);
        }
        // Input stays as it was.
        assert_eq!(current, vec![true, false, true]);
    }

    #[test]
    fn test_random_solution_has_catalogue_length() {
        let problem = synthetic(17);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(problem.random_solution(&mut rng).len(), 17);
    }

    #[test]
    fn test_packed_iterates_selected_items_in_order() {
        let problem = camping();
        let names: Vec<&str> = problem
            .packed(&[true, false, true])
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, ["tent", "canoe"]);
    }

    #[test]
    fn test_shape_mismatch_fails_before_any_iteration() {
        let problem = camping();
        let config = SaConfig::default().with_seed(1);

        let err = SaRunner::run(&problem, vec![true, false], &config).unwrap_err();
        assert_eq!(
            err,
            SaError::Shape(ShapeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_anneal_converges_on_small_instance() {
        // Known instance: tent+canoe (22) is the optimum, tent+stove (16)
        // and stove+canoe (18) are the other local maxima, so any cold
        // finish lands at 16 or better.
        let problem = camping();
        let config = SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_end_temperature(0.01)
            .with_cooling(CoolingSchedule::Geometric { rate: 0.999 })
            .with_seed(42);

        let infeasible_start = vec![true, true, true];
        let result = SaRunner::run(&problem, infeasible_start, &config).unwrap();

        assert!(result.final_temperature <= 0.01);
        assert!(
            result.reward >= 16.0,
            "expected a feasible packing worth at least 16, got {}",
            result.reward
        );
        assert!(result.best_reward >= result.reward);
    }

    proptest! {
        #[test]
        fn prop_reward_total_and_sign_correct(
            bits in proptest::collection::vec(any::<bool>(), 1..40)
        ) {
            let problem = synthetic(bits.len());

            let mut value = 0i64;
            let mut weight = 0i64;
            let mut volume = 0i64;
            for (item, &packed) in problem.items().iter().zip(&bits) {
                if packed {
                    value += item.value;
                    weight += item.weight;
                    volume += item.volume;
                }
            }

            let reward = problem.reward(&bits);
            if weight > problem.max_weight() || volume > problem.max_volume() {
                prop_assert_eq!(reward, -((weight + volume) as f64));
                prop_assert!(reward <= 0.0);
            } else {
                prop_assert_eq!(reward, value as f64);
            }
        }

        #[test]
        fn prop_neighbor_is_hamming_distance_one(
            bits in proptest::collection::vec(any::<bool>(), 1..40),
            seed in any::<u64>()
        ) {
            let problem = synthetic(bits.len());
            let mut rng = StdRng::seed_from_u64(seed);

            let next = problem.neighbor(&bits, &mut rng);
            prop_assert_eq!(next.len(), bits.len());
            let flipped = bits.iter().zip(&next).filter(|(a, b)| a != b).count();
            prop_assert_eq!(flipped, 1);
        }
    }
}
