//! Codec module - Plain-text serialization of boards.
//!
//! The format is a bare line-oriented grid with no header: one line per row,
//! oldest row first, one `'0'` (dead) or `'1'` (live) per cell, each line
//! newline-terminated. Dimensions are recovered purely from the content
//! shape on read, so a file round-trips without any side metadata.

mod format;
mod store;

pub use format::{CodecError, decode, encode};
pub use store::{read_board, write_board};
