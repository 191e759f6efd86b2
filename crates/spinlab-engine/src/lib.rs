//! # spinlab-engine — Three-Reel Slot Evaluation Core
//!
//! Pure evaluation logic for a single-line, three-reel slot machine:
//! the symbol alphabet, the fixed paytable, spin generation, and the
//! exact (analytic) expectation of the paytable.
//!
//! ## Architecture
//!
//! ```text
//! SpinEvaluator
//!     │
//!     ├── PayTable (match multipliers)
//!     └── StdRng (uniform symbol draws)
//!           │
//!           v
//!     SpinOutcome { reels, matched, multiplier, win_amount }
//! ```
//!
//! Evaluation is side-effect free: every spin draws three symbols,
//! classifies the best qualifying match, and scales the multiplier by
//! the bet. Aggregation across spins lives in `spinlab-sim`.

pub mod math;
pub mod paytable;
pub mod spin;
pub mod symbols;

pub use math::*;
pub use paytable::*;
pub use spin::*;
pub use symbols::*;
