//! Standard piece movement.

use super::MoveRules;
use crate::obstruction::{has_blocking_piece, line_step};
use crate::Board;
use chess_core::{Color, MoveRequest, Piece, PieceKind, Square};

/// Standard chess piece movement without check, castling, en passant or
/// promotion.
///
/// - King: one square in any direction
/// - Queen, Rook, Bishop: along their lines, with nothing in between
/// - Knight: an L of one and two squares, jumping
/// - Pawn: one square forward, two from its starting row over an empty
///   square, captures one square diagonally forward
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl MoveRules for StandardRules {
    fn is_legal_move(&self, board: &Board, source: Square, destination: Square) -> bool {
        let Some(piece) = board.piece_at(source) else {
            return false;
        };
        let request = MoveRequest::new(source, destination);
        let legal = match piece.kind {
            PieceKind::Pawn => pawn_move(board, piece.color, request),
            _ => reaches(board, piece, request),
        };
        tracing::debug!(%piece, %source, %destination, legal, "quiet move checked");
        legal
    }

    fn is_legal_capture(&self, board: &Board, source: Square, destination: Square) -> bool {
        let Some(piece) = board.piece_at(source) else {
            return false;
        };
        let request = MoveRequest::new(source, destination);
        let legal = match piece.kind {
            PieceKind::Pawn => pawn_capture(piece.color, request),
            _ => reaches(board, piece, request),
        };
        tracing::debug!(%piece, %source, %destination, legal, "capture checked");
        legal
    }
}

/// Destination geometry shared by quiet moves and captures for every kind
/// except the pawn. Sliders also need a clear line.
fn reaches(board: &Board, piece: Piece, request: MoveRequest) -> bool {
    let (drow, dcol) = (request.row_delta(), request.col_delta());
    let shape = match piece.kind {
        PieceKind::King => drow.abs().max(dcol.abs()) == 1,
        PieceKind::Knight => matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1)),
        PieceKind::Rook => straight(drow, dcol),
        PieceKind::Bishop => diagonal(drow, dcol),
        PieceKind::Queen => straight(drow, dcol) || diagonal(drow, dcol),
        PieceKind::Pawn => unreachable!("pawns are dispatched separately"),
    };
    shape && (!piece.kind.is_slider() || clear_line(board, request))
}

fn pawn_move(board: &Board, color: Color, request: MoveRequest) -> bool {
    let forward = color.pawn_direction();
    if request.col_delta() != 0 {
        return false;
    }
    let MoveRequest {
        source,
        destination,
    } = request;
    if request.row_delta() == forward {
        return board.is_empty(destination);
    }
    if request.row_delta() == 2 * forward && source.row() == color.pawn_row() {
        let skipped = source.offset(forward, 0);
        return skipped.is_some_and(|sq| board.is_empty(sq)) && board.is_empty(destination);
    }
    false
}

fn pawn_capture(color: Color, request: MoveRequest) -> bool {
    request.row_delta() == color.pawn_direction() && request.col_delta().abs() == 1
}

fn straight(drow: i8, dcol: i8) -> bool {
    (drow == 0) != (dcol == 0)
}

fn diagonal(drow: i8, dcol: i8) -> bool {
    drow != 0 && drow.abs() == dcol.abs()
}

fn clear_line(board: &Board, request: MoveRequest) -> bool {
    debug_assert!(line_step(request.source, request.destination).is_some());
    !has_blocking_piece(board, request.source, request.destination)
}
