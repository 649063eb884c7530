//! Board state: a rectangular grid of binary cells plus the rule that
//! governs it.

use log::debug;

use crate::schema::{EvolutionMode, SeedPolicy, SeedRng, SimulationConfig};

use super::RuleTable;

/// A `num_time` x `num_cells` grid of binary cells.
///
/// Rows are stored row-major in one contiguous buffer, so the whole grid is
/// a single allocation and a row is a plain slice. Row 0 is the oldest row.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Cell states, indexed `[time * num_cells + cell]`.
    cells: Vec<bool>,
    num_cells: usize,
    num_time: usize,
    rule: RuleTable,
    seed: SeedPolicy,
}

impl Board {
    /// Allocate an all-dead board carrying the config's rule and seed policy.
    ///
    /// Dimensions are passed separately from the config because the codec
    /// recovers them from file content rather than from configuration.
    pub fn blank(num_cells: usize, num_time: usize, config: &SimulationConfig) -> Self {
        Self {
            cells: vec![false; num_cells * num_time],
            num_cells,
            num_time,
            rule: RuleTable::new(config.rule as u8),
            seed: config.seed,
        }
    }

    /// Allocate and seed a board for the configured evolution mode.
    ///
    /// Batch boards are seeded at row 0. Scroll boards are seeded at the
    /// bottom row, since new rows enter from the bottom and old rows scroll
    /// off the top.
    pub fn from_seed(config: &SimulationConfig, rng: &mut SeedRng) -> Self {
        config.validate().expect("Invalid configuration");

        let mut board = Self::blank(config.num_cells, config.num_time, config);
        let seed_time = match config.mode {
            EvolutionMode::Batch => 0,
            EvolutionMode::Scroll => board.num_time - 1,
        };
        config.seed.apply(board.row_mut(seed_time), rng);
        debug!(
            "seeded {}x{} board, rule {}, seed row {}",
            board.num_cells,
            board.num_time,
            board.rule.number(),
            seed_time
        );
        board
    }

    /// Row width in cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Number of rows.
    #[inline]
    pub fn num_time(&self) -> usize {
        self.num_time
    }

    /// The decoded rule governing this board.
    #[inline]
    pub fn rule(&self) -> RuleTable {
        self.rule
    }

    /// The policy the starting row was (or would be) seeded with.
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed
    }

    /// Cell state at (time, cell).
    #[inline]
    pub fn get(&self, time: usize, cell: usize) -> bool {
        self.cells[time * self.num_cells + cell]
    }

    /// Set the cell state at (time, cell).
    #[inline]
    pub fn set(&mut self, time: usize, cell: usize, alive: bool) {
        self.cells[time * self.num_cells + cell] = alive;
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, time: usize) -> &[bool] {
        &self.cells[time * self.num_cells..(time + 1) * self.num_cells]
    }

    /// One row as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, time: usize) -> &mut [bool] {
        let start = time * self.num_cells;
        &mut self.cells[start..start + self.num_cells]
    }

    /// Iterate over rows, oldest first.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.num_cells)
    }

    /// Borrow row `src` immutably and the later row `dst` mutably at once.
    ///
    /// The evolver reads one row while writing its successor; a plain pair
    /// of `row`/`row_mut` calls cannot express that to the borrow checker.
    pub(crate) fn rows_split_mut(&mut self, src: usize, dst: usize) -> (&[bool], &mut [bool]) {
        assert!(src < dst, "source row must precede destination row");
        let width = self.num_cells;
        let (head, tail) = self.cells.split_at_mut(dst * width);
        (&head[src * width..(src + 1) * width], &mut tail[..width])
    }

    /// Shift every row one step toward the top, discarding row 0.
    ///
    /// The bottom row keeps its previous contents; the evolver overwrites it
    /// immediately after.
    pub(crate) fn shift_up(&mut self) {
        self.cells.copy_within(self.num_cells.., 0);
    }

    /// Count live cells across the whole board.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}
