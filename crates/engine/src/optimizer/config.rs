//! Per-iteration configuration and results.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::optimizer::Kernel;

/// Parameters read by every iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationConfig {
    /// Gap insertions per candidate per iteration
    pub tumble_count: usize,
    /// Weight gap positions by the conservation profile
    pub use_profile_bias: bool,
    /// Depth of the attractive kernel
    pub attraction_distance: f64,
    /// Width of the attractive kernel
    pub attraction_width: f64,
    /// Depth of the repulsive kernel
    pub repulsion_distance: f64,
    /// Width of the repulsive kernel
    pub repulsion_width: f64,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            tumble_count: 2,
            use_profile_bias: true,
            attraction_distance: 0.1,
            attraction_width: 0.002,
            repulsion_distance: 0.1,
            repulsion_width: 0.001,
        }
    }
}

impl IterationConfig {
    pub fn attraction(&self) -> Kernel {
        Kernel::new(self.attraction_distance, self.attraction_width)
    }

    pub fn repulsion(&self) -> Kernel {
        Kernel::new(self.repulsion_distance, self.repulsion_width)
    }

    /// Reject non-finite kernel constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("attraction_distance", self.attraction_distance),
            ("attraction_width", self.attraction_width),
            ("repulsion_distance", self.repulsion_distance),
            ("repulsion_width", self.repulsion_width),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// What one iteration reports back to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationOutcome {
    /// Index of the best candidate
    pub best_index: usize,
    /// Index of the candidate replaced by the best
    pub worst_index: usize,
    /// Fitness of the best candidate
    pub fitness: f64,
    /// Substitution score of the best candidate
    pub substitution_score: f64,
    /// Interaction score of the best candidate
    pub interaction_score: f64,
    /// Evaluations performed so far
    pub cumulative_evaluations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kernels() {
        let config = IterationConfig::default();
        assert_eq!(config.attraction(), Kernel::new(0.1, 0.002));
        assert_eq!(config.repulsion(), Kernel::new(0.1, 0.001));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = IterationConfig {
            repulsion_width: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { name: "repulsion_width", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: IterationConfig = serde_json::from_str(r#"{"tumble_count": 5}"#).unwrap();
        assert_eq!(config.tumble_count, 5);
        assert!(config.use_profile_bias);
        assert_eq!(config.attraction_width, 0.002);
    }
}
