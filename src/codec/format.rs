//! Plain-text board format: one line per row, one `'0'`/`'1'` per cell.

use std::io;
use std::path::PathBuf;

use crate::compute::Board;
use crate::schema::SimulationConfig;

/// Errors from reading, writing or parsing a serialized board.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Board file is empty or starts with an empty line")]
    EmptyBoard,
    #[error("Row {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unexpected character {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

impl CodecError {
    /// Whether the file itself is malformed, as opposed to being unreadable.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, CodecError::Io { .. })
    }
}

/// Serialize a board: one newline-terminated line of `'0'`/`'1'` per row,
/// oldest row first.
pub fn encode(board: &Board) -> String {
    let mut out = String::with_capacity(board.num_time() * (board.num_cells() + 1));
    for row in board.rows() {
        for &cell in row {
            out.push(if cell { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Parse a serialized board, inferring dimensions from the content.
///
/// The first line fixes the width and every later line must match it; the
/// line count fixes the height. Characters other than `'0'` and `'1'` are
/// rejected rather than coerced. A missing final newline is tolerated.
///
/// Rule and seed policy are not part of this format, so the decoded board
/// takes them from `config`.
pub fn decode(text: &str, config: &SimulationConfig) -> Result<Board, CodecError> {
    let lines: Vec<&str> = text.lines().collect();
    let num_cells = lines.first().map_or(0, |line| line.chars().count());
    if num_cells == 0 {
        return Err(CodecError::EmptyBoard);
    }

    let mut board = Board::blank(num_cells, lines.len(), config);
    for (time, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != num_cells {
            return Err(CodecError::RaggedRow {
                line: time + 1,
                expected: num_cells,
                found,
            });
        }
        for (cell, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => board.set(time, cell, true),
                other => {
                    return Err(CodecError::InvalidCell {
                        line: time + 1,
                        column: cell + 1,
                        found: other,
                    });
                }
            }
        }
    }
    Ok(board)
}
