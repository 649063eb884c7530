//! File-backed board storage.

use std::fs;
use std::path::Path;

use log::debug;

use crate::compute::Board;
use crate::schema::SimulationConfig;

use super::format::{self, CodecError};

/// Write `board` to `path` in the plain-text format.
pub fn write_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<(), CodecError> {
    let path = path.as_ref();
    fs::write(path, format::encode(board)).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "wrote {}x{} board to {}",
        board.num_cells(),
        board.num_time(),
        path.display()
    );
    Ok(())
}

/// Read a board from `path`, inferring dimensions from the content.
pub fn read_board<P: AsRef<Path>>(
    path: P,
    config: &SimulationConfig,
) -> Result<Board, CodecError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = format::decode(&text, config)?;
    debug!(
        "read {}x{} board from {}",
        board.num_cells(),
        board.num_time(),
        path.display()
    );
    Ok(board)
}
