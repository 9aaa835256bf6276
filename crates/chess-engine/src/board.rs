//! Board state: an 8x8 grid of optional pieces plus a move counter.

use chess_core::{Color, Layout, Piece, PieceKind, Square};
use std::fmt;

/// The contents of all 64 squares and the number of moves applied so far.
///
/// The grid is indexed `[row][col]` with row 0 = rank 1 and col 0 = file a.
/// Writes go through [`Board::apply_move`], which the game controller calls
/// only after the rules have accepted a move.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    moves_played: u32,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn new() -> Self {
        Board {
            squares: [[None; 8]; 8],
            moves_played: 0,
        }
    }

    /// Creates a board set up in the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.setup_initial_position();
        board
    }

    /// Creates a board from a layout. The move counter starts at zero.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::new();
        for (sq, piece) in layout.pieces() {
            board.place(sq, piece);
        }
        board
    }

    /// Returns a layout snapshot of the current contents.
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout::empty();
        for (sq, piece) in self.pieces() {
            layout.set(sq, Some(piece));
        }
        layout
    }

    /// Clears the board, places the standard initial position and resets the
    /// move counter. Calling it again restarts the game.
    pub fn setup_initial_position(&mut self) {
        self.squares = [[None; 8]; 8];
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in PieceKind::BACK_ROW.into_iter().enumerate() {
                self.squares[back][col] = Some(Piece::new(kind, color));
                self.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        self.moves_played = 0;
        tracing::debug!("board set up in the initial position");
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Number of moves applied since the last setup.
    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Iterates over occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves whatever stands on `source` to `destination`, replacing anything
    /// there, and bumps the move counter. Returns the displaced piece.
    ///
    /// No legality checking happens here.
    pub(crate) fn apply_move(&mut self, source: Square, destination: Square) -> Option<Piece> {
        let moving = self.clear(source);
        let displaced = self.clear(destination);
        if let Some(piece) = moving {
            self.place(destination, piece);
        }
        self.moves_played += 1;
        tracing::debug!(%source, %destination, moves_played = self.moves_played, "move applied");
        displaced
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_layout())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}, moves_played: {})", self, self.moves_played)
    }
}
