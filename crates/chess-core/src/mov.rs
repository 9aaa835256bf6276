//! Move request representation.

use crate::{CoordinateError, Square};
use std::fmt;

/// A request to move whatever stands on `source` to `destination`.
///
/// Whether the request is a quiet move or a capture depends on the board it
/// is applied to, so that distinction is not stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub source: Square,
    pub destination: Square,
}

impl MoveRequest {
    #[inline]
    pub const fn new(source: Square, destination: Square) -> Self {
        MoveRequest {
            source,
            destination,
        }
    }

    /// Resolves a pair of designators.
    pub fn from_designators(source: &str, destination: &str) -> Result<Self, CoordinateError> {
        Ok(MoveRequest {
            source: Square::resolve(source)?,
            destination: Square::resolve(destination)?,
        })
    }

    /// Splits text typed as one token (`"e2e4"`) or two tokens separated by
    /// whitespace or a dash (`"e2 e4"`, `"e2-e4"`) into its two designators.
    /// The designators are not resolved.
    pub fn split_designators(text: &str) -> Option<(&str, &str)> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [joined] if joined.chars().count() == 4 => {
                let split = joined
                    .char_indices()
                    .nth(2)
                    .map_or(joined.len(), |(i, _)| i);
                Some(joined.split_at(split))
            }
            [source, destination] => Some((source, destination)),
            _ => None,
        }
    }

    /// Row distance, signed (destination minus source).
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.destination.row() as i8 - self.source.row() as i8
    }

    /// Column distance, signed (destination minus source).
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.destination.col() as i8 - self.source.col() as i8
    }
}

impl fmt::Debug for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveRequest({}{})", self.source, self.destination)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
