//! Initial chaos configuration.
//!
//! Configuration files use snake_case keys while the admin API speaks
//! camelCase, so the seed is read into its own struct and converted.

use domain::{ChaosConfig, LatencyConfig};
use serde::{Deserialize, Serialize};

/// Chaos settings applied at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaosSeedConfig {
    pub enabled: bool,
    pub failure_rate_percent: i32,
    pub default_error_type: String,
    pub latency: LatencySeedConfig,
}

/// Latency settings applied at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencySeedConfig {
    pub enabled: bool,
    pub delay_ms: i32,
}

impl Default for ChaosSeedConfig {
    fn default() -> Self {
        Self::from(&ChaosConfig::default())
    }
}

impl From<&ChaosConfig> for ChaosSeedConfig {
    fn from(config: &ChaosConfig) -> Self {
        Self {
            enabled: config.enabled,
            failure_rate_percent: config.failure_rate_percent,
            default_error_type: config.default_error_type.clone(),
            latency: LatencySeedConfig {
                enabled: config.latency.enabled,
                delay_ms: config.latency.delay_ms,
            },
        }
    }
}

impl From<ChaosSeedConfig> for ChaosConfig {
    fn from(seed: ChaosSeedConfig) -> Self {
        Self {
            enabled: seed.enabled,
            failure_rate_percent: seed.failure_rate_percent,
            default_error_type: seed.default_error_type,
            latency: LatencyConfig {
                enabled: seed.latency.enabled,
                delay_ms: seed.latency.delay_ms,
            },
        }
    }
}
