//! Move legality engine and game controller for two-player chess.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox board with a move counter
//! - [`obstruction`] - line-of-sight checks for sliding pieces
//! - [`MoveRules`] - per-piece legality of quiet moves and captures
//! - [`Game`] - turn order, move submission and history
//!
//! # Architecture
//!
//! Legality and mutation are kept apart: the rules only answer whether a move
//! may happen, the board only carries it out, and the game controller is the
//! single place that connects the two. Check, castling, en passant and
//! promotion are not modeled.
//!
//! # Example
//!
//! ```
//! use chess_core::Color;
//! use chess_engine::{Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! let outcome = game.submit_move("e2", "e4").unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(game.current_turn(), Color::Black);
//!
//! let outcome = game.submit_move("e5", "e4").unwrap();
//! assert!(matches!(outcome, MoveOutcome::Rejected(_)));
//! ```

mod board;
mod game;
pub mod obstruction;
pub mod rules;

pub use board::Board;
pub use game::{
    Clock, Game, GameError, GameOptions, GameStatus, HistoryEntry, MoveOutcome, Rejection,
    SystemClock,
};
pub use obstruction::has_blocking_piece;
pub use rules::{is_legal_capture, is_legal_move, MoveRules, StandardRules};
