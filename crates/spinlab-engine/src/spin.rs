//! Spin generation and evaluation

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::paytable::PayTable;
use crate::symbols::{BLANK_SYMBOL, SYMBOL_COUNT, SymbolId};

/// Number of reels in a trial
pub const REEL_COUNT: usize = 3;

/// Result of a single spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Drawn symbols, in reel order
    pub reels: [SymbolId; REEL_COUNT],
    /// Best qualifying match, if any: (symbol, occurrence count)
    pub matched: Option<(SymbolId, u8)>,
    /// Paytable multiplier for the match (0.0 on a loss)
    pub multiplier: f64,
    /// Bet placed on this spin
    pub bet: f64,
    /// Win in currency units (multiplier × bet)
    pub win_amount: f64,
}

impl SpinOutcome {
    /// Evaluate a trial against a paytable
    pub fn from_reels(paytable: &PayTable, reels: [SymbolId; REEL_COUNT], bet: f64) -> Self {
        let matched = best_match(&reels);
        let multiplier = matched
            .map(|(symbol, count)| paytable.multiplier(symbol, count))
            .unwrap_or(0.0);
        Self {
            reels,
            matched,
            multiplier,
            bet,
            win_amount: multiplier * bet,
        }
    }

    /// Check if this spin paid anything
    pub fn is_win(&self) -> bool {
        self.win_amount > 0.0
    }
}

/// Find the best qualifying match in a trial: the symbol (blank excluded)
/// with the highest occurrence count of 2 or more.
///
/// With only three draws at most one non-blank symbol can occur twice or
/// more, so there is never a tie to break.
pub fn best_match(reels: &[SymbolId; REEL_COUNT]) -> Option<(SymbolId, u8)> {
    let mut counts = [0u8; SYMBOL_COUNT as usize];
    for &symbol in reels {
        counts[symbol as usize] += 1;
    }

    for (symbol, &count) in counts.iter().enumerate() {
        if symbol as SymbolId == BLANK_SYMBOL {
            continue;
        }
        if count == 3 {
            return Some((symbol as SymbolId, 3));
        }
    }
    for (symbol, &count) in counts.iter().enumerate() {
        if symbol as SymbolId == BLANK_SYMBOL {
            continue;
        }
        if count == 2 {
            return Some((symbol as SymbolId, 2));
        }
    }
    None
}

/// Multiplier for a trial (0.0 when nothing matches)
pub fn evaluate(paytable: &PayTable, reels: &[SymbolId; REEL_COUNT]) -> f64 {
    best_match(reels)
        .map(|(symbol, count)| paytable.multiplier(symbol, count))
        .unwrap_or(0.0)
}

/// Spin generator — draws uniform trials and prices them.
///
/// The generator is statistically uniform per draw and independent
/// across draws; it is not cryptographically secure and does not need
/// to be.
pub struct SpinEvaluator {
    paytable: PayTable,
    bet: f64,
    rng: StdRng,
}

impl SpinEvaluator {
    /// Create an evaluator seeded from OS entropy
    pub fn new(paytable: PayTable, bet: f64) -> Self {
        Self {
            paytable,
            bet,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Re-seed for deterministic runs
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Execute one spin
    pub fn spin(&mut self) -> SpinOutcome {
        let reels: [SymbolId; REEL_COUNT] =
            std::array::from_fn(|_| self.rng.random_range(0..SYMBOL_COUNT));
        SpinOutcome::from_reels(&self.paytable, reels, self.bet)
    }

    /// The paytable in use
    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    /// The fixed per-spin bet
    pub fn bet(&self) -> f64 {
        self.bet
    }
}
