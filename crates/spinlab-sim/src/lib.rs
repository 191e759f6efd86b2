//! # spinlab-sim — Long-Run RTP Batch Simulation
//!
//! Drives `spinlab-engine` through an unbounded stream of spins and
//! tracks the empirical Return-to-Player ratio as it converges.
//!
//! ## Architecture
//!
//! ```text
//! Simulation
//!     │
//!     ├── worker thread(s) ──┐   batched spins, local accumulation
//!     │                      v
//!     │               SharedTotals (one mutex, atomic per batch)
//!     │                      ^
//!     └── reporter thread ───┘   1s tick, snapshot + status line
//! ```
//!
//! Workers never hold the lock while spinning: each accumulates a local
//! `SimTotals` for a full batch and commits it in one locked merge, so
//! the reporter can only ever observe batch boundaries.

pub mod config;
pub mod format;
pub mod reporter;
pub mod sim;
pub mod stats;
pub mod worker;

pub use config::*;
pub use format::*;
pub use reporter::*;
pub use sim::*;
pub use stats::*;
pub use worker::*;
