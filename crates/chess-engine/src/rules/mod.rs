//! Move legality rules.
//!
//! This module provides the [`MoveRules`] trait, which answers whether the
//! piece on a source square may reach a destination square, either as a
//! quiet move onto an empty square or as a capture of an enemy piece.
//! The game controller consults the active rule set before touching the board.

mod standard;

pub use standard::StandardRules;

use crate::Board;
use chess_core::Square;

/// Piece movement rules.
///
/// Callers establish the preconditions: `source` is occupied, and
/// `destination` is empty for [`is_legal_move`](MoveRules::is_legal_move) or
/// holds an enemy piece for [`is_legal_capture`](MoveRules::is_legal_capture).
/// With those in place, implementations answer from the geometry of the piece
/// on `source` and the squares in between. An empty `source` is never legal.
///
/// # Example
///
/// ```
/// use chess_core::Square;
/// use chess_engine::Board;
/// use chess_engine::rules::{MoveRules, StandardRules};
///
/// let board = Board::standard();
/// let b1 = Square::resolve("b1").unwrap();
/// let c3 = Square::resolve("c3").unwrap();
/// assert!(StandardRules.is_legal_move(&board, b1, c3));
/// ```
pub trait MoveRules {
    /// Returns true if the piece on `source` may move to the empty `destination`.
    fn is_legal_move(&self, board: &Board, source: Square, destination: Square) -> bool;

    /// Returns true if the piece on `source` may capture on `destination`.
    fn is_legal_capture(&self, board: &Board, source: Square, destination: Square) -> bool;
}

/// Checks a quiet move with [`StandardRules`].
pub fn is_legal_move(board: &Board, source: Square, destination: Square) -> bool {
    StandardRules.is_legal_move(board, source, destination)
}

/// Checks a capture with [`StandardRules`].
pub fn is_legal_capture(board: &Board, source: Square, destination: Square) -> bool {
    StandardRules.is_legal_capture(board, source, destination)
}
