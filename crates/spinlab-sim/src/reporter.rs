//! Periodic status reporting

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, select, tick};

use crate::format::status_line;
use crate::stats::SharedTotals;

/// Spawn the reporting loop: one status line per interval until the
/// stop channel fires or every sender is dropped.
///
/// The tick channel gives a timer-based cadence instead of a bare
/// sleep; jitter from a slow print shifts the next line, nothing else.
pub fn spawn_reporter(
    interval: Duration,
    totals: Arc<SharedTotals>,
    stop_rx: Receiver<()>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        log::debug!("reporter started, interval {interval:?}");
        let ticker = tick(interval);
        loop {
            select! {
                recv(ticker) -> _ => {
                    println!("{}", status_line(&totals.snapshot()));
                }
                recv(stop_rx) -> _ => break,
            }
        }
        log::debug!("reporter stopped");
    })
}
