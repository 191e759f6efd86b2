//! Exact paytable expectation
//!
//! Three uniform draws from twelve symbols give 12³ = 1728 equally
//! likely trials, few enough to enumerate outright instead of deriving
//! the combinatorics by hand.

use crate::paytable::PayTable;
use crate::spin::{REEL_COUNT, evaluate};
use crate::symbols::{SYMBOL_COUNT, SymbolId};

/// Expected multiplier per spin under the given paytable
pub fn expected_multiplier(paytable: &PayTable) -> f64 {
    let mut total = 0.0;
    let mut trials = 0u32;
    for a in 0..SYMBOL_COUNT {
        for b in 0..SYMBOL_COUNT {
            for c in 0..SYMBOL_COUNT {
                let reels: [SymbolId; REEL_COUNT] = [a, b, c];
                total += evaluate(paytable, &reels);
                trials += 1;
            }
        }
    }
    total / f64::from(trials)
}

/// Theoretical RTP of the paytable, as a percentage
pub fn expected_rtp(paytable: &PayTable) -> f64 {
    expected_multiplier(paytable) * 100.0
}
