//! Rank computation configuration

use linkrank_algorithms::{IterateConfig, RankError};

/// Parameters shared by both estimators
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping (usually 0.85)
    pub damping_factor: f64,
    /// Rounds for the sampling estimator
    pub samples: usize,
    /// Largest per-page change at which the iterative solver stops
    pub tolerance: f64,
    /// Sweep cap for the iterative solver
    pub max_sweeps: usize,
    /// Seed for the sampling start page (None = thread RNG)
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            tolerance: 0.001,
            max_sweeps: 10_000,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Check every parameter once, before either estimator runs.
    pub fn validate(&self) -> Result<(), RankError> {
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(RankError::InvalidDamping(self.damping_factor));
        }
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }
        if !(self.tolerance > 0.0) {
            return Err(RankError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    pub fn iterate_config(&self) -> IterateConfig {
        IterateConfig {
            damping_factor: self.damping_factor,
            tolerance: self.tolerance,
            max_sweeps: self.max_sweeps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RankConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.iterate_config(), IterateConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let config = RankConfig { damping_factor: 1.01, ..RankConfig::default() };
        assert_eq!(config.validate(), Err(RankError::InvalidDamping(1.01)));

        let config = RankConfig { samples: 0, ..RankConfig::default() };
        assert_eq!(config.validate(), Err(RankError::InvalidSampleCount(0)));

        let config = RankConfig { tolerance: -1.0, ..RankConfig::default() };
        assert_eq!(config.validate(), Err(RankError::InvalidTolerance(-1.0)));

        let config = RankConfig { damping_factor: 0.0, ..RankConfig::default() };
        assert!(config.validate().is_ok());
    }
}
