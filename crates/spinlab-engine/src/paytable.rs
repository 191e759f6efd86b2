//! Paytable — match multipliers for the fixed machine

use serde::{Deserialize, Serialize};

use crate::symbols::{BLANK_SYMBOL, JACKPOT_SYMBOL, SymbolId};

/// Multipliers paid per qualifying match, in bet units.
///
/// The machine pays on the best match in a trial: a 3-of-a-kind beats a
/// 2-of-a-kind, and the jackpot symbol pays its own premium tier. The
/// blank symbol never matches regardless of count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayTable {
    /// 3-of-a-kind of the jackpot symbol
    pub triple_jackpot: f64,
    /// 3-of-a-kind of any other paying symbol
    pub triple: f64,
    /// 2-of-a-kind of the jackpot symbol
    pub pair_jackpot: f64,
    /// 2-of-a-kind of any other paying symbol
    pub pair: f64,
}

impl PayTable {
    /// Multiplier for `count` occurrences of `symbol` in one trial.
    ///
    /// Counts outside 2..=3 and the blank symbol pay nothing.
    pub fn multiplier(&self, symbol: SymbolId, count: u8) -> f64 {
        if symbol == BLANK_SYMBOL {
            return 0.0;
        }
        match count {
            3 => {
                if symbol == JACKPOT_SYMBOL {
                    self.triple_jackpot
                } else {
                    self.triple
                }
            }
            2 => {
                if symbol == JACKPOT_SYMBOL {
                    self.pair_jackpot
                } else {
                    self.pair
                }
            }
            _ => 0.0,
        }
    }

    /// Largest multiplier the table can pay on a single spin
    pub fn max_multiplier(&self) -> f64 {
        self.triple_jackpot
            .max(self.triple)
            .max(self.pair_jackpot)
            .max(self.pair)
    }
}

impl Default for PayTable {
    fn default() -> Self {
        Self {
            triple_jackpot: 77.7,
            triple: 33.3,
            pair_jackpot: 7.7,
            pair: 3.0,
        }
    }
}
