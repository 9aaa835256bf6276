//! Board square representation and designator resolution.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a textual designator does not name a square.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),
}

/// A square on the board.
///
/// Stored as `row * 8 + col` where row 0 is rank 1 and col 0 is file a,
/// so a1 = 0, h1 = 7, a2 = 8 and h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, both in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Resolves a designator such as `"e4"` into a square.
    ///
    /// Only the first two characters are considered; anything after them is
    /// ignored. File and rank may appear in either order, so `"4e"` names the
    /// same square as `"e4"`.
    pub fn resolve(designator: &str) -> Result<Self, CoordinateError> {
        let invalid = || CoordinateError::InvalidCoordinate(designator.to_string());
        let mut chars = designator.chars();
        let (first, second) = match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(invalid()),
        };

        let (file, rank) = match (file_index(first), rank_index(second)) {
            (Some(col), Some(row)) => (col, row),
            _ => match (rank_index(first), file_index(second)) {
                (Some(row), Some(col)) => (col, row),
                _ => return Err(invalid()),
            },
        };
        Ok(Square(rank * 8 + file))
    }

    /// Returns the file-first designator for this square (e.g. `"e4"`).
    pub fn format(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file_char());
        s.push(self.rank_char());
        s
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.row()) as char
    }

    /// Returns the square reached by stepping `drow` rows and `dcol` columns,
    /// or `None` if that leaves the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row() as i8 + drow;
        let col = self.col() as i8 + dcol;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Square::new(row as u8, col as u8)
        } else {
            None
        }
    }
}

fn file_index(c: char) -> Option<u8> {
    match c {
        'a'..='h' => Some(c as u8 - b'a'),
        _ => None,
    }
}

fn rank_index(c: char) -> Option<u8> {
    match c {
        '1'..='8' => Some(c as u8 - b'1'),
        _ => None,
    }
}

impl FromStr for Square {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::resolve(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.format())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
