//! Simulation tuning constants

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed per-spin bet, in currency units
pub const DEFAULT_BET: f64 = 1.0;

/// Spins accumulated locally before a commit to shared totals
pub const DEFAULT_BATCH_SIZE: u32 = 100_000;

/// Cadence of the reporting loop
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Compiled-in simulation parameters.
///
/// There is deliberately no runtime configuration surface — no flags,
/// no config file. Batch size and report interval are throughput and
/// latency knobs, not behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Bet per spin, scales every payout multiplier
    pub bet_amount: f64,
    /// Spins per locally-accumulated batch
    pub batch_size: u32,
    /// Interval between status lines
    pub report_interval: Duration,
    /// Number of worker threads
    pub workers: usize,
}

impl SimConfig {
    /// One worker per available core
    pub fn parallel() -> Self {
        Self {
            workers: num_cpus::get().max(1),
            ..Self::default()
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bet_amount: DEFAULT_BET,
            batch_size: DEFAULT_BATCH_SIZE,
            report_interval: DEFAULT_REPORT_INTERVAL,
            workers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.bet_amount, 1.0);
        assert_eq!(config.batch_size, 100_000);
        assert_eq!(config.report_interval, Duration::from_secs(1));
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn test_parallel_has_at_least_one_worker() {
        assert!(SimConfig::parallel().workers >= 1);
    }
}
