//! Text form of moves: `<file><rank>-<file><rank>`, files a-h, ranks 1-8
//! bottom to top (e.g. `f3-d5`).
//!
//! Parsing reports format errors only; whether a move is legal on some
//! board is a separate question answered by [`Board::is_legal_move`].
//!
//! [`Board::is_legal_move`]: crate::board::Board::is_legal_move

use thiserror::Error;

use crate::types::{coord_to_sq, Move};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed move text {0:?} (expected the form \"f3-d5\")")]
pub struct ParseMoveError(pub String);

/// Parse move text into a [`Move`] with the capture flag unset.
pub fn parse_move(text: &str) -> Result<Move, ParseMoveError> {
    let err = || ParseMoveError(text.to_string());
    let (from, to) = text.split_once('-').ok_or_else(err)?;
    let from = coord_to_sq(from).ok_or_else(err)?;
    let to = coord_to_sq(to).ok_or_else(err)?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
