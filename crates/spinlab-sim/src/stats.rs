//! Simulation totals — per-batch accumulation and shared state

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use spinlab_engine::{JACKPOT_SYMBOL, SpinOutcome};

/// Running totals for a set of spins.
///
/// Used both as the worker-local batch accumulator and as the snapshot
/// type read by the reporter; merging two `SimTotals` is exact
/// addition, so a batch commit is a single merge under the lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTotals {
    /// Spins performed
    pub spins: u64,
    /// Amount wagered, in currency units
    pub wagered: f64,
    /// Amount won, in currency units
    pub won: f64,
    /// Spins that paid anything
    pub wins: u64,
    /// 2-of-a-kind matches
    pub pairs: u64,
    /// 3-of-a-kind matches
    pub triples: u64,
    /// 2-of-a-kind of the jackpot symbol
    pub jackpot_pairs: u64,
    /// 3-of-a-kind of the jackpot symbol
    pub jackpot_triples: u64,
    /// Largest win-to-bet ratio seen
    pub max_win_ratio: f64,
}

impl SimTotals {
    /// Fold one spin into the totals
    pub fn record(&mut self, outcome: &SpinOutcome) {
        self.spins += 1;
        self.wagered += outcome.bet;
        self.won += outcome.win_amount;
        if outcome.is_win() {
            self.wins += 1;
        }
        match outcome.matched {
            Some((symbol, 3)) => {
                self.triples += 1;
                if symbol == JACKPOT_SYMBOL {
                    self.jackpot_triples += 1;
                }
            }
            Some((symbol, 2)) => {
                self.pairs += 1;
                if symbol == JACKPOT_SYMBOL {
                    self.jackpot_pairs += 1;
                }
            }
            _ => {}
        }
        if outcome.bet > 0.0 {
            let ratio = outcome.win_amount / outcome.bet;
            if ratio > self.max_win_ratio {
                self.max_win_ratio = ratio;
            }
        }
    }

    /// Add another set of totals into this one
    pub fn merge(&mut self, other: &SimTotals) {
        self.spins += other.spins;
        self.wagered += other.wagered;
        self.won += other.won;
        self.wins += other.wins;
        self.pairs += other.pairs;
        self.triples += other.triples;
        self.jackpot_pairs += other.jackpot_pairs;
        self.jackpot_triples += other.jackpot_triples;
        if other.max_win_ratio > self.max_win_ratio {
            self.max_win_ratio = other.max_win_ratio;
        }
    }

    /// Return to Player, as a percentage; 0.0 before anything is wagered
    pub fn rtp(&self) -> f64 {
        if self.wagered > 0.0 {
            (self.won / self.wagered) * 100.0
        } else {
            0.0
        }
    }

    /// Complement of RTP
    pub fn house_edge(&self) -> f64 {
        100.0 - self.rtp()
    }

    /// Share of spins that paid anything, as a percentage
    pub fn hit_rate(&self) -> f64 {
        if self.spins > 0 {
            (self.wins as f64 / self.spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Process-wide totals shared between workers and the reporter.
///
/// One mutex guards the whole struct, so a batch's spins, wagered, and
/// won increments become visible together or not at all.
#[derive(Debug, Default)]
pub struct SharedTotals {
    inner: Mutex<SimTotals>,
}

impl SharedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a batch atomically
    pub fn record_batch(&self, batch: &SimTotals) {
        self.inner.lock().merge(batch);
    }

    /// Consistent instantaneous view of the totals
    pub fn snapshot(&self) -> SimTotals {
        *self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use spinlab_engine::PayTable;

    #[test]
    fn test_rtp_zero_when_nothing_wagered() {
        let totals = SimTotals::default();
        assert_eq!(totals.rtp(), 0.0);
        assert_eq!(totals.house_edge(), 100.0);
        assert_eq!(totals.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_classifies_matches() {
        let table = PayTable::default();
        let mut totals = SimTotals::default();
        totals.record(&SpinOutcome::from_reels(&table, [0, 0, 0], 1.0));
        totals.record(&SpinOutcome::from_reels(&table, [4, 4, 9], 1.0));
        totals.record(&SpinOutcome::from_reels(&table, [0, 3, 0], 1.0));
        totals.record(&SpinOutcome::from_reels(&table, [1, 2, 3], 1.0));
        totals.record(&SpinOutcome::from_reels(&table, [7, 7, 7], 1.0));

        assert_eq!(totals.spins, 5);
        assert_eq!(totals.wins, 3);
        assert_eq!(totals.triples, 1);
        assert_eq!(totals.jackpot_triples, 1);
        assert_eq!(totals.pairs, 2);
        assert_eq!(totals.jackpot_pairs, 1);
        assert_eq!(totals.wagered, 5.0);
        assert_eq!(totals.won, 77.7 + 3.0 + 7.7);
        assert_eq!(totals.max_win_ratio, 77.7);
        assert_eq!(totals.hit_rate(), 60.0);
    }

    #[test]
    fn test_sequential_batches_sum_exactly() {
        let shared = SharedTotals::new();
        let batch = SimTotals {
            spins: 1_000,
            wagered: 1_000.0,
            won: 250.0,
            wins: 120,
            ..Default::default()
        };
        for _ in 0..50 {
            shared.record_batch(&batch);
        }
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.spins, 50_000);
        assert_eq!(snapshot.wagered, 50_000.0);
        assert_eq!(snapshot.won, 12_500.0);
        assert_eq!(snapshot.wins, 6_000);
    }

    #[test]
    fn test_concurrent_batches_lose_no_updates() {
        const THREADS: usize = 8;
        const BATCHES: usize = 200;

        let shared = Arc::new(SharedTotals::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    let batch = SimTotals {
                        spins: 1_000,
                        wagered: 1_000.0,
                        won: 250.0,
                        ..Default::default()
                    };
                    for _ in 0..BATCHES {
                        shared.record_batch(&batch);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("stress thread panicked");
        }

        let snapshot = shared.snapshot();
        let committed = (THREADS * BATCHES) as u64;
        assert_eq!(snapshot.spins, committed * 1_000);
        assert_eq!(snapshot.wagered, (committed * 1_000) as f64);
        assert_eq!(snapshot.won, committed as f64 * 250.0);
    }

    #[test]
    fn test_merge_keeps_max_ratio() {
        let mut a = SimTotals {
            max_win_ratio: 33.3,
            ..Default::default()
        };
        let b = SimTotals {
            max_win_ratio: 7.7,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.max_win_ratio, 33.3);
    }
}
