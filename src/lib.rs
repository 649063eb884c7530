//! Elementary cellular automata on a ring of cells.
//!
//! This crate simulates the one-dimensional, two-state, radius-1 cellular
//! automata classified by Wolfram rule numbers: a rule (0-255), a row width
//! and a time depth produce a rectangular binary board of the automaton's
//! evolution, one row per time step.
//!
//! # Architecture
//!
//! The crate is split into four modules:
//!
//! - `schema`: Configuration and seeding types
//! - `compute`: Rule decoding, board state and the two evolution modes
//! - `codec`: Plain-text board serialization
//! - `render`: Text/color renderers and the live terminal scroll view
//!
//! Evolution comes in two disciplines. *Batch* seeds the first row and fills
//! the rest of a fixed board once. *Scroll* seeds the bottom row of a
//! fixed-height window and advances it indefinitely, discarding the oldest
//! row each step.
//!
//! # Example
//!
//! ```rust
//! use wolfram_ca::{
//!     compute::{Board, Evolver},
//!     render::{Renderer, TextRenderer},
//!     schema::{SeedRng, SimulationConfig},
//! };
//!
//! // Rule 110 on a 64-cell ring, 32 rows deep
//! let config = SimulationConfig {
//!     num_cells: 64,
//!     num_time: 32,
//!     rule: 110,
//!     ..Default::default()
//! };
//!
//! let mut board = Board::from_seed(&config, &mut SeedRng::new(0));
//! Evolver::new(config.mode).run(&mut board);
//!
//! print!("{}", TextRenderer::default().render(&board));
//! ```

pub mod codec;
pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Board, Evolver, RuleTable};
pub use render::{Renderer, TextRenderer};
pub use schema::{EvolutionMode, SeedPolicy, SeedRng, SimulationConfig};
