//! Line-of-sight checks for sliding pieces.
//!
//! Both functions require the two squares to share a row, a column or a
//! diagonal. Passing squares that do not is a bug in the caller and panics.

use crate::Board;
use chess_core::Square;

/// Returns the unit step leading from `source` toward `destination` when the
/// two share a row, column or diagonal, and `None` otherwise (including when
/// they are the same square).
pub fn line_step(source: Square, destination: Square) -> Option<(i8, i8)> {
    let drow = destination.row() as i8 - source.row() as i8;
    let dcol = destination.col() as i8 - source.col() as i8;
    let aligned = drow == 0 || dcol == 0 || drow.abs() == dcol.abs();
    if source == destination || !aligned {
        return None;
    }
    Some((drow.signum(), dcol.signum()))
}

/// Iterator over the squares strictly between two aligned squares, walking
/// from the source side.
#[derive(Debug, Clone)]
pub struct Between {
    next: Option<Square>,
    end: Square,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next.filter(|&sq| sq != self.end)?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Returns the squares strictly between `source` and `destination`.
///
/// # Panics
///
/// Panics if the squares are distinct and share no row, column or diagonal.
pub fn squares_between(source: Square, destination: Square) -> Between {
    if source == destination {
        return Between {
            next: None,
            end: destination,
            step: (0, 0),
        };
    }
    let step = line_step(source, destination).unwrap_or_else(|| {
        panic!("{source} and {destination} share no row, column or diagonal")
    });
    Between {
        next: source.offset(step.0, step.1),
        end: destination,
        step,
    }
}

/// Returns true if any square strictly between `source` and `destination` is
/// occupied.
///
/// # Panics
///
/// Panics if the squares are distinct and share no row, column or diagonal.
pub fn has_blocking_piece(board: &Board, source: Square, destination: Square) -> bool {
    let blocker = squares_between(source, destination).find(|&sq| !board.is_empty(sq));
    if let Some(sq) = blocker {
        tracing::debug!(%source, %destination, blocker = %sq, "line of sight blocked");
    }
    blocker.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Layout;

    fn sq(s: &str) -> Square {
        Square::resolve(s).unwrap()
    }

    fn between(a: &str, b: &str) -> Vec<String> {
        squares_between(sq(a), sq(b)).map(Square::format).collect()
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    #[test]
    fn same_row_both_directions() {
        assert_eq!(between("a1", "e1"), ["b1", "c1", "d1"]);
        assert_eq!(between("e1", "a1"), ["d1", "c1", "b1"]);
    }

    #[test]
    fn same_column_both_directions() {
        assert_eq!(between("a1", "a5"), ["a2", "a3", "a4"]);
        assert_eq!(between("a5", "a1"), ["a4", "a3", "a2"]);
    }

    #[test]
    fn rising_diagonal() {
        assert_eq!(between("c1", "f4"), ["d2", "e3"]);
        assert_eq!(between("f4", "c1"), ["e3", "d2"]);
    }

    #[test]
    fn falling_diagonal() {
        assert_eq!(between("a8", "d5"), ["b7", "c6"]);
        assert_eq!(between("d5", "a8"), ["c6", "b7"]);
        assert_eq!(between("h1", "a8"), ["g2", "f3", "e4", "d5", "c6", "b7"]);
    }

    #[test]
    fn adjacent_squares_have_nothing_between() {
        assert!(between("d4", "e5").is_empty());
        assert!(between("d4", "d5").is_empty());
        assert!(between("d4", "d4").is_empty());
    }

    #[test]
    fn every_aligned_pair_is_symmetric() {
        for a in Square::all() {
            for b in Square::all() {
                if line_step(a, b).is_none() {
                    continue;
                }
                let mut forward: Vec<Square> = squares_between(a, b).collect();
                let backward: Vec<Square> = squares_between(b, a).collect();
                forward.reverse();
                assert_eq!(forward, backward, "{a} <-> {b}");
                let drow = (b.row() as i8 - a.row() as i8).abs();
                let dcol = (b.col() as i8 - a.col() as i8).abs();
                assert_eq!(forward.len() as i8, drow.max(dcol) - 1);
            }
        }
    }

    #[test]
    fn blocking_on_file() {
        let b = board("8/8/8/8/8/P7/8/R7");
        assert!(has_blocking_piece(&b, sq("a1"), sq("a5")));
        assert!(!has_blocking_piece(&b, sq("a1"), sq("a3")));
        assert!(!has_blocking_piece(&b, sq("a1"), sq("h1")));
    }

    #[test]
    fn blocking_on_both_diagonals() {
        let b = board("8/8/8/8/4p3/8/2P5/8");
        assert!(has_blocking_piece(&b, sq("b1"), sq("d3")));
        assert!(has_blocking_piece(&b, sq("h1"), sq("d5")));
        assert!(!has_blocking_piece(&b, sq("h1"), sq("e4")));
        assert!(!has_blocking_piece(&b, sq("a1"), sq("h8")));
    }

    #[test]
    #[should_panic(expected = "share no row, column or diagonal")]
    fn unaligned_squares_panic() {
        let _ = has_blocking_piece(&Board::new(), sq("b1"), sq("c3"));
    }
}
