//! Compute module - Rule decoding, board state and evolution.

mod board;
mod evolver;
mod rule;

pub use board::*;
pub use evolver::*;
pub use rule::*;
