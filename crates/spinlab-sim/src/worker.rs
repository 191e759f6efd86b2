//! Batch spin workers

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use spinlab_engine::{PayTable, SpinEvaluator};

use crate::config::SimConfig;
use crate::stats::{SharedTotals, SimTotals};

/// Pause between batches so stop requests are observed promptly.
/// Not load-bearing for correctness, only for cancellation latency.
const BATCH_PAUSE: Duration = Duration::from_millis(1);

/// Spawn the work loop threads. Each runs until `stop` is set.
pub fn spawn_workers(
    config: &SimConfig,
    totals: &Arc<SharedTotals>,
    stop: &Arc<AtomicBool>,
) -> Vec<thread::JoinHandle<()>> {
    (0..config.workers.max(1))
        .map(|index| {
            let config = config.clone();
            let totals = Arc::clone(totals);
            let stop = Arc::clone(stop);
            thread::spawn(move || run_worker(index, config, totals, stop))
        })
        .collect()
}

fn run_worker(index: usize, config: SimConfig, totals: Arc<SharedTotals>, stop: Arc<AtomicBool>) {
    log::debug!("spin worker {index} started");
    let mut evaluator = SpinEvaluator::new(PayTable::default(), config.bet_amount);

    while !stop.load(Ordering::Acquire) {
        let mut batch = SimTotals::default();
        for _ in 0..config.batch_size {
            batch.record(&evaluator.spin());
        }
        totals.record_batch(&batch);
        thread::sleep(BATCH_PAUSE);
    }

    log::debug!("spin worker {index} stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_stop_and_commit_whole_batches() {
        let config = SimConfig {
            batch_size: 500,
            workers: 2,
            ..Default::default()
        };
        let totals = Arc::new(SharedTotals::new());
        let stop = Arc::new(AtomicBool::new(false));

        let handles = spawn_workers(&config, &totals, &stop);
        assert_eq!(handles.len(), 2);

        // Let at least one batch land, then stop.
        while totals.snapshot().spins == 0 {
            thread::sleep(Duration::from_millis(1));
        }
        stop.store(true, Ordering::Release);
        for handle in handles {
            handle.join().expect("worker panicked");
        }

        let snapshot = totals.snapshot();
        assert!(snapshot.spins > 0);
        assert_eq!(snapshot.spins % 500, 0, "only whole batches are committed");
        assert_eq!(snapshot.wagered, snapshot.spins as f64 * config.bet_amount);
    }
}
