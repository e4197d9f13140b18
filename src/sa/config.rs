//! SA configuration and cooling schedules.

use thiserror::Error;

/// Cooling schedule for temperature reduction.
///
/// Both variants lower the temperature once per iteration; the loop stops
/// as soon as the temperature is no longer strictly above the configured
/// end temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (multiplicative) cooling: `T_{k+1} = rate * T_k`.
    ///
    /// Never reaches zero in finitely many steps, so termination relies on
    /// the end-temperature comparison. Typical `rate`: 0.95–0.9999.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        rate: f64,
    },

    /// Additive (linear) cooling: `T_{k+1} = T_k - step`.
    ///
    /// Goes non-positive after finitely many steps, so the loop terminates
    /// even with an end temperature of zero.
    Additive {
        /// Amount subtracted per iteration. Must be positive.
        step: f64,
    },
}

impl CoolingSchedule {
    /// Applies one cooling step to `temperature`.
    pub fn next(self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { rate } => temperature * rate,
            CoolingSchedule::Additive { step } => temperature - step,
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { rate: 0.95 }
    }
}

/// Rejected annealing configuration.
///
/// Raised by [`SaConfig::validate`] before the first search iteration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The initial temperature is not a positive finite number.
    #[error("initial_temperature must be positive and finite, got {0}")]
    InitialTemperature(f64),

    /// The end temperature is negative or not finite.
    #[error("end_temperature must be finite and >= 0, got {0}")]
    EndTemperature(f64),

    /// The geometric cooling factor is outside (0, 1).
    #[error("geometric cooling rate must be in (0, 1), got {0}")]
    Rate(f64),

    /// The additive cooling step is not a positive finite number.
    #[error("additive cooling step must be positive and finite, got {0}")]
    Step(f64),
}

/// Configuration for the annealing loop.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10_000.0)
///     .with_end_temperature(0.0001)
///     .with_cooling(CoolingSchedule::Geometric { rate: 0.9999 })
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Inclusive lower bound on the temperature. The loop runs while the
    /// temperature is strictly above this value.
    ///
    /// An initial temperature at or below the end temperature is valid and
    /// yields a run with zero iterations.
    pub end_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Defensive cap on the number of iterations. 0 = no cap.
    ///
    /// When non-zero, exhausting the cap while the temperature is still
    /// above the end temperature fails the run instead of looping forever.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            end_temperature: 0.01,
            cooling: CoolingSchedule::default(),
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_end_temperature(mut self, t: f64) -> Self {
        self.end_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The parameter ranges double as the termination guarantee: a geometric
    /// rate below 1 or a positive additive step always pushes the
    /// temperature down to the end temperature in finitely many steps
    /// (geometric cooling additionally needs `end_temperature > 0`; with an
    /// end temperature of exactly 0 the temperature approaches but never
    /// crosses it, which is why [`SaConfig::max_iterations`] exists).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !self.end_temperature.is_finite() || self.end_temperature < 0.0 {
            return Err(ConfigError::EndTemperature(self.end_temperature));
        }
        match self.cooling {
            CoolingSchedule::Geometric { rate } => {
                if !(rate > 0.0 && rate < 1.0) {
                    return Err(ConfigError::Rate(rate));
                }
            }
            CoolingSchedule::Additive { step } => {
                if !step.is_finite() || step <= 0.0 {
                    return Err(ConfigError::Step(step));
                }
            }
        }
        Ok(())
    }
}
