//! Simulation lifecycle — start, observe, shut down

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::{Sender, bounded};

use crate::config::SimConfig;
use crate::reporter::spawn_reporter;
use crate::stats::{SharedTotals, SimTotals};
use crate::worker::spawn_workers;

/// Shutdown failure
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("spin worker panicked")]
    WorkerPanic,
    #[error("reporter thread panicked")]
    ReporterPanic,
}

/// A running simulation: worker threads feeding shared totals and a
/// reporter printing snapshots.
///
/// Created with [`Simulation::start`], torn down with
/// [`Simulation::shutdown`]; totals accumulated up to the shutdown are
/// returned, never lost.
pub struct Simulation {
    totals: Arc<SharedTotals>,
    stop: Arc<AtomicBool>,
    stop_tx: Sender<()>,
    workers: Vec<JoinHandle<()>>,
    reporter: JoinHandle<()>,
}

impl Simulation {
    /// Start all loops
    pub fn start(config: SimConfig) -> Self {
        let totals = Arc::new(SharedTotals::new());
        let stop = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = bounded(1);

        let workers = spawn_workers(&config, &totals, &stop);
        let reporter = spawn_reporter(config.report_interval, Arc::clone(&totals), stop_rx);

        log::info!(
            "simulation started: {} worker(s), batch size {}, bet ${:.2}",
            workers.len(),
            config.batch_size,
            config.bet_amount
        );

        Self {
            totals,
            stop,
            stop_tx,
            workers,
            reporter,
        }
    }

    /// Current totals, consistent at batch granularity
    pub fn snapshot(&self) -> SimTotals {
        self.totals.snapshot()
    }

    /// Signal both loops, wait for them, and return the final totals.
    ///
    /// Workers finish their in-flight batch before exiting, so the
    /// returned totals include every spin performed.
    pub fn shutdown(self) -> Result<SimTotals, SimError> {
        self.stop.store(true, Ordering::Release);
        let _ = self.stop_tx.send(());

        for handle in self.workers {
            handle.join().map_err(|_| SimError::WorkerPanic)?;
        }
        self.reporter.join().map_err(|_| SimError::ReporterPanic)?;

        let totals = self.totals.snapshot();
        log::info!(
            "simulation stopped after {} spins, RTP {:.6}%",
            totals.spins,
            totals.rtp()
        );
        Ok(totals)
    }
}
