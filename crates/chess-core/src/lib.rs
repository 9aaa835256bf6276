//! Core types for chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates and designator resolution
//! - [`MoveRequest`] for a requested source/destination pair
//! - [`Layout`] for textual board layouts

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use mov::MoveRequest;
pub use piece::{Piece, PieceKind};
pub use square::{CoordinateError, Square};
