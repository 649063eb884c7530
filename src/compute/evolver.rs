//! Board evolution: batch fill and scrolling-window advance.
//!
//! Both modes share the same per-row transition; they differ only in where
//! the source and destination rows live. Batch walks a cursor down a fixed
//! board, scroll shifts the whole window up and refills the bottom row.

use crate::schema::EvolutionMode;

use super::{Board, RuleTable};

/// Compute the successor of `src` into `dst` under `rule`.
///
/// The row is treated as a ring: column 0 and the last column are neighbors,
/// so patterns wrap instead of dying at the edges.
pub fn next_row(rule: &RuleTable, src: &[bool], dst: &mut [bool]) {
    let width = src.len();
    debug_assert_eq!(width, dst.len());
    for cell in 0..width {
        let left = src[(cell + width - 1) % width];
        let center = src[cell];
        let right = src[(cell + 1) % width];
        dst[cell] = rule.next(left, center, right);
    }
}

/// Advances a board through time in its configured discipline.
pub struct Evolver {
    mode: EvolutionMode,
    /// Next row to fill in batch mode; unused by scroll.
    front: usize,
}

impl Evolver {
    pub fn new(mode: EvolutionMode) -> Self {
        Self { mode, front: 1 }
    }

    /// Perform one transition on `board`.
    ///
    /// Batch mode fills the next unfilled row and reports `false` once the
    /// board is complete (further calls leave it untouched). Scroll mode
    /// shifts the window up a row, computes a fresh bottom row from the one
    /// above it, and always reports `true`.
    pub fn step(&mut self, board: &mut Board) -> bool {
        let rule = board.rule();
        match self.mode {
            EvolutionMode::Batch => {
                if self.front >= board.num_time() {
                    return false;
                }
                let (src, dst) = board.rows_split_mut(self.front - 1, self.front);
                next_row(&rule, src, dst);
                self.front += 1;
                true
            }
            EvolutionMode::Scroll => {
                board.shift_up();
                let last = board.num_time() - 1;
                let (src, dst) = board.rows_split_mut(last - 1, last);
                next_row(&rule, src, dst);
                true
            }
        }
    }

    /// Run a batch board to completion.
    ///
    /// A scroll evolver never completes on its own; drive it one `step` per
    /// frame instead, the way the terminal view does.
    pub fn run(&mut self, board: &mut Board) {
        debug_assert_eq!(self.mode, EvolutionMode::Batch);
        while self.step(board) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SeedRng, SimulationConfig};

    fn batch_config(num_cells: usize, num_time: usize, rule: u32) -> SimulationConfig {
        SimulationConfig {
            num_cells,
            num_time,
            rule,
            ..Default::default()
        }
    }

    fn filled_batch(num_cells: usize, num_time: usize, rule: u32) -> Board {
        let config = batch_config(num_cells, num_time, rule);
        let mut board = Board::from_seed(&config, &mut SeedRng::new(0));
        Evolver::new(EvolutionMode::Batch).run(&mut board);
        board
    }

    fn row_bits(board: &Board, time: usize) -> Vec<u8> {
        board.row(time).iter().map(|&cell| cell as u8).collect()
    }

    #[test]
    fn rule_30_fills_a_batch_board_as_on_paper() {
        // Hand-derived: rule 30, 7 cells, single seed at column 0, ring
        // boundary.
        let board = filled_batch(7, 4, 30);
        assert_eq!(row_bits(&board, 0), [1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(row_bits(&board, 1), [1, 1, 0, 0, 0, 0, 1]);
        assert_eq!(row_bits(&board, 2), [0, 0, 1, 0, 0, 1, 1]);
        assert_eq!(row_bits(&board, 3), [1, 1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn the_ring_boundary_feeds_both_edges() {
        let rule = RuleTable::new(30);
        let mut dst = [false; 5];

        // A live cell in the last column is the left neighbor of column 0.
        next_row(&rule, &[false, false, false, false, true], &mut dst);
        assert_eq!(dst, [true, false, false, true, true]);

        // A live cell in column 0 is the right neighbor of the last column.
        next_row(&rule, &[true, false, false, false, false], &mut dst);
        assert_eq!(dst, [true, true, false, false, true]);
    }

    #[test]
    fn batch_step_reports_completion() {
        let config = batch_config(5, 3, 90);
        let mut board = Board::from_seed(&config, &mut SeedRng::new(0));
        let mut evolver = Evolver::new(EvolutionMode::Batch);
        assert!(evolver.step(&mut board));
        assert!(evolver.step(&mut board));
        assert!(!evolver.step(&mut board));

        // A completed board stays put.
        let snapshot = board.clone();
        assert!(!evolver.step(&mut board));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn a_one_row_batch_board_is_complete_immediately() {
        let config = batch_config(5, 1, 30);
        let mut board = Board::from_seed(&config, &mut SeedRng::new(0));
        let mut evolver = Evolver::new(EvolutionMode::Batch);
        assert!(!evolver.step(&mut board));
        assert_eq!(row_bits(&board, 0), [1, 0, 0, 0, 0]);
    }

    #[test]
    fn scroll_window_tracks_the_batch_rows() {
        for rule in [30u32, 90] {
            let height = 4;
            let steps = 6;
            // Reference: a batch board deep enough to cover every step.
            let reference = filled_batch(11, steps + 1, rule);

            let mut config = batch_config(11, height, rule);
            config.mode = EvolutionMode::Scroll;
            let mut window = Board::from_seed(&config, &mut SeedRng::new(0));
            let mut evolver = Evolver::new(EvolutionMode::Scroll);
            for _ in 0..steps {
                evolver.step(&mut window);
            }

            // After n steps the window holds batch rows
            // [n - height + 1, n], oldest at the top.
            for offset in 0..height {
                assert_eq!(
                    window.row(offset),
                    reference.row(steps - height + 1 + offset),
                    "rule {rule}, window row {offset}"
                );
            }
        }
    }

    #[test]
    fn scroll_keeps_blank_history_above_the_seed_at_first() {
        let mut config = batch_config(8, 5, 30);
        config.mode = EvolutionMode::Scroll;
        let mut window = Board::from_seed(&config, &mut SeedRng::new(0));
        let mut evolver = Evolver::new(EvolutionMode::Scroll);
        evolver.step(&mut window);

        // One step in: rows 0-2 are still blank, row 3 holds the seed row
        // and row 4 its successor.
        for time in 0..3 {
            assert!(window.row(time).iter().all(|&cell| !cell));
        }
        assert_eq!(row_bits(&window, 3), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(row_bits(&window, 4), [1, 1, 0, 0, 0, 0, 0, 1]);
    }
}
