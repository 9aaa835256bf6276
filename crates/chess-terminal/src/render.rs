//! Text rendering of boards and move history, plain or with ANSI colors.

use crate::config::Players;
use chess_core::{Color, Piece, Square};
use chess_engine::{Board, HistoryEntry};
use chrono::{DateTime, Local};
use std::fmt::Write;

const FILES: &str = "  a b c d e f g h";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RESET: &str = "\x1B[0m";
const WHITE_PIECE: &str = "\x1B[30;47m"; // black on white
const BLACK_PIECE: &str = "\x1B[37;40m"; // white on black
const ERROR: &str = "\x1B[1;31m";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// How boards and messages are decorated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Bare text, for pipes, files and tests.
    #[default]
    Plain,
    /// ANSI colors for pieces and errors; the screen is cleared before each board.
    Ansi,
}

impl Style {
    /// Escape sequence that clears the terminal, empty when plain.
    pub fn clear_screen(self) -> &'static str {
        match self {
            Style::Plain => "",
            Style::Ansi => CLEAR_SCREEN,
        }
    }

    /// Wraps an error line.
    pub fn error(self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Ansi => format!("{ERROR}{text}{RESET}"),
        }
    }

    fn piece(self, piece: Piece) -> String {
        match self {
            Style::Plain => piece.to_char().to_string(),
            Style::Ansi => {
                let colors = match piece.color {
                    Color::White => WHITE_PIECE,
                    Color::Black => BLACK_PIECE,
                };
                format!("{colors}{}{RESET}", piece.to_char())
            }
        }
    }
}

/// Renders the board with rank 8 on top. White pieces are uppercase, Black
/// lowercase and empty squares are dots; `style` decorates the pieces.
pub fn render_board(board: &Board, style: Style) -> String {
    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');
    for row in (0..8u8).rev() {
        let rank = row + 1;
        let _ = write!(out, "{rank}");
        for col in 0..8u8 {
            out.push(' ');
            match Square::new(row, col).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => out.push_str(&style.piece(piece)),
                None => out.push('.'),
            }
        }
        let _ = writeln!(out, " {rank}");
    }
    out.push_str(FILES);
    out.push('\n');
    out
}

/// Title shown above the board: a greeting before the first move, otherwise
/// the move number, who played it and what happened.
pub fn render_title(
    board: &Board,
    last: Option<&HistoryEntry>,
    players: &Players,
    message: &str,
) -> String {
    match last {
        Some(entry) if board.moves_played() > 0 => format!(
            "{}) {}'s move ({}):\n{}\n",
            board.moves_played(),
            entry.color,
            players.name(entry.color),
            message
        ),
        _ => format!(
            "Starting a new game! {} (White) vs {} (Black)\n",
            players.white, players.black
        ),
    }
}

/// Renders the history table, oldest move first.
pub fn render_history(history: &[HistoryEntry], started_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "History (started {}):", started_at.format(TIMESTAMP_FORMAT));
    if history.is_empty() {
        out.push_str("  no moves yet\n");
    }
    for (i, entry) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<5} {:<22} {}",
            i + 1,
            entry.color,
            entry.description,
            entry.timestamp.format(TIMESTAMP_FORMAT)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Layout;
    use chess_engine::{Clock, Game, GameOptions};
    use chrono::TimeZone;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap()
        }
    }

    #[test]
    fn starting_board() {
        let expected = "  a b c d e f g h
8 r n b q k b n r 8
7 p p p p p p p p 7
6 . . . . . . . . 6
5 . . . . . . . . 5
4 . . . . . . . . 4
3 . . . . . . . . 3
2 P P P P P P P P 2
1 R N B Q K B N R 1
  a b c d e f g h
";
        assert_eq!(render_board(&Board::standard(), Style::Plain), expected);
    }

    #[test]
    fn plain_style_adds_nothing() {
        assert_eq!(Style::default(), Style::Plain);
        assert_eq!(Style::Plain.clear_screen(), "");
        assert_eq!(Style::Plain.error("Error: x"), "Error: x");
    }

    #[test]
    fn ansi_style_colors_pieces_by_side() {
        let board = Board::from_layout(&Layout::parse("4k3/8/8/8/8/8/8/4K3").unwrap());
        let text = render_board(&board, Style::Ansi);
        assert!(text.contains("8 . . . . \x1B[37;40mk\x1B[0m . . . 8"));
        assert!(text.contains("1 . . . . \x1B[30;47mK\x1B[0m . . . 1"));
        assert!(text.contains("5 . . . . . . . . 5"));
        assert_eq!(Style::Ansi.error("Error: x"), "\x1B[1;31mError: x\x1B[0m");
        assert!(Style::Ansi.clear_screen().starts_with("\x1B[2J"));
    }

    #[test]
    fn sparse_board() {
        let board = Board::from_layout(&Layout::parse("4k3/8/8/8/8/8/8/R3K3").unwrap());
        let text = render_board(&board, Style::Plain);
        assert!(text.contains("8 . . . . k . . . 8"));
        assert!(text.contains("1 R . . . K . . . 1"));
    }

    #[test]
    fn title_before_and_after_a_move() {
        let players = Players::default();
        let mut game = Game::with_clock(FixedClock, GameOptions::default());
        assert_eq!(
            render_title(game.board(), game.history().last(), &players, ""),
            "Starting a new game! Player 1 (White) vs Player 2 (Black)\n"
        );

        let outcome = game.submit_move("e2", "e4").unwrap();
        assert_eq!(
            render_title(game.board(), game.history().last(), &players, &outcome.reason()),
            "1) White's move (Player 1):\nMoving White Pawn from e2 to e4.\n"
        );
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn title_names_the_side_on_turn_when_turns_are_relaxed() {
        let players = Players::default();
        let options = GameOptions {
            enforce_turn_order: false,
        };
        let mut game = Game::with_clock(FixedClock, options);
        let outcome = game.submit_move("e7", "e5").unwrap();
        assert_eq!(
            render_title(game.board(), game.history().last(), &players, &outcome.reason()),
            "1) White's move (Player 1):\nMoving Black Pawn from e7 to e5.\n"
        );
    }

    #[test]
    fn history_table() {
        let mut game = Game::with_clock(FixedClock, GameOptions::default());
        assert!(render_history(game.history(), game.started_at()).contains("no moves yet"));

        game.submit_move("e2", "e4").unwrap();
        game.submit_move("e7", "e5").unwrap();
        let text = render_history(game.history(), game.started_at());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "History (started 2022-03-01 12:00:00):");
        assert_eq!(
            lines[1],
            "  1. White Pawn: e2 -> e4         2022-03-01 12:00:00"
        );
        assert!(lines[2].starts_with("  2. Black Pawn: e7 -> e5"));
        assert_eq!(lines.len(), 3);
    }
}
