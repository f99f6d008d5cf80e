//! Routing tuning parameters.

use serde::Serialize;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Allowed distance between the weight sum and 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// Retry, timeout and weighting parameters for the router.
///
/// Building a `RoutingConfig` does not check the weights; call
/// [`RoutingConfig::validate_weights`] (or build a [`super::Config`], which
/// does it for you).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingConfig {
    /// Maximum attempts after the first failure
    pub max_retries: u32,
    /// Delay between attempts
    #[serde(serialize_with = "super::serialize_secs")]
    pub retry_delay: Duration,
    /// Per-route timeout
    #[serde(serialize_with = "super::serialize_secs")]
    pub timeout: Duration,
    /// Weigh physical, network and economic cost together
    pub enable_multi_d_routing: bool,
    pub physical_weight: f64,
    pub network_weight: f64,
    pub economic_weight: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            enable_multi_d_routing: true,
            physical_weight: 0.4,
            network_weight: 0.4,
            economic_weight: 0.2,
        }
    }
}

impl RoutingConfig {
    /// Sum of the three weighting coefficients
    pub fn weight_sum(&self) -> f64 {
        self.physical_weight + self.network_weight + self.economic_weight
    }

    /// Check that the weights sum to 1.0 within [`WEIGHT_TOLERANCE`].
    pub fn validate_weights(&self) -> Result<()> {
        let sum = self.weight_sum();
        // NaN fails the comparison and is rejected too
        if (sum - 1.0).abs() <= WEIGHT_TOLERANCE {
            Ok(())
        } else {
            Err(ConfigError::WeightSum { sum })
        }
    }
}

/// Convert a seconds value from the environment into a `Duration`.
pub(crate) fn seconds(field: &'static str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| ConfigError::invalid_value(field, format!("{secs} is not a valid number of seconds")))
}
