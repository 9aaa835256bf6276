//! Board layout notation parsing and serialization.
//!
//! A layout lists the ranks from 8 down to 1, separated by `/`. Within a rank,
//! pieces are letters (`KQRBNP` for White, lowercase for Black) and runs of
//! empty squares are digits, e.g. the starting position is
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use crate::{Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid layout: rank {rank} covers {width} squares")]
    InvalidRankWidth { rank: u8, width: usize },

    #[error("invalid layout: unknown piece '{0}'")]
    UnknownPiece(char),
}

/// Piece placement for all 64 squares.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    squares: [Option<Piece>; 64],
}

impl Layout {
    /// The standard starting position.
    pub const STARTING: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// An empty board.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Creates a layout with no pieces.
    pub const fn empty() -> Self {
        Layout {
            squares: [None; 64],
        }
    }

    /// Parses a layout string.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = text.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut layout = Layout::empty();
        for (i, rank_str) in ranks.iter().enumerate() {
            let row = 7 - i as u8;
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::UnknownPiece(c))?;
                if let Some(sq) = Square::new(row, col as u8).filter(|_| col < 8) {
                    layout.squares[sq.index() as usize] = Some(piece);
                }
                col += 1;
            }
            if col != 8 {
                return Err(LayoutError::InvalidRankWidth {
                    rank: row + 1,
                    width: col,
                });
            }
        }
        Ok(layout)
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Sets or clears `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Iterates over occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            let mut empty_run = 0;
            for col in 0..8u8 {
                let piece = Square::new(row, col).and_then(|sq| self.get(sq));
                match piece {
                    Some(p) => {
                        if empty_run > 0 {
                            write!(f, "{}", empty_run)?;
                            empty_run = 0;
                        }
                        write!(f, "{}", p.to_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{}", empty_run)?;
            }
            if row > 0 {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn sq(s: &str) -> Square {
        Square::resolve(s).unwrap()
    }

    #[test]
    fn parse_starting() {
        let layout = Layout::parse(Layout::STARTING).unwrap();
        assert_eq!(layout.pieces().count(), 32);
        assert_eq!(
            layout.get(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            layout.get(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            layout.get(sq("a7")),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(layout.get(sq("e4")), None);
    }

    #[test]
    fn display_matches_input() {
        for text in [
            Layout::STARTING,
            Layout::EMPTY,
            "4k3/8/8/4p3/3P4/8/8/R3K3",
            "r6r/1b2k1bq/8/8/7B/8/8/R3K2R",
        ] {
            assert_eq!(Layout::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            Layout::parse("8/8/8"),
            Err(LayoutError::InvalidRankCount(3))
        );
    }

    #[test]
    fn wrong_rank_width() {
        assert_eq!(
            Layout::parse("9/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidRankWidth { rank: 8, width: 9 })
        );
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/RNBQKBN"),
            Err(LayoutError::InvalidRankWidth { rank: 1, width: 7 })
        );
    }

    #[test]
    fn unknown_piece() {
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/RNBXKBNR"),
            Err(LayoutError::UnknownPiece('X'))
        );
    }

    #[test]
    fn set_and_clear() {
        let mut layout = Layout::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        layout.set(sq("a1"), Some(rook));
        assert_eq!(layout.to_string(), "8/8/8/8/8/8/8/R7");
        layout.set(sq("a1"), None);
        assert_eq!(layout.to_string(), Layout::EMPTY);
    }
}
