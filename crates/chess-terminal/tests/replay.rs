use chess_core::{Color, PieceKind, Square};
use chess_engine::GameOptions;
use chess_terminal::config::{Players, TerminalConfig};
use chess_terminal::moves_file::load_moves;
use chess_terminal::session::{ReplaySource, Session};
use std::path::PathBuf;

fn demos() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

#[test]
fn demo_config_parses() {
    let config = TerminalConfig::load(&demos().join("chess.toml")).unwrap();
    assert_eq!(config.players, Players::default());
    assert_eq!(config.moves_file, PathBuf::from("demos/moves.json"));
    assert!(config.enforce_turn_order);
}

#[test]
fn demo_game_replays_cleanly() {
    let moves = load_moves(&demos().join("moves.json")).unwrap();
    assert_eq!(moves.len(), 12);

    let mut session = Session::new(Players::default(), GameOptions::default(), Vec::new());
    let summary = session.run(&mut ReplaySource::new(moves)).unwrap();
    assert_eq!(summary.accepted, 12);
    assert_eq!(summary.rejected, 0);
    assert_eq!(summary.invalid, 0);

    let game = session.game();
    let f7 = Square::resolve("f7").unwrap();
    let king = game.piece_at(f7).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(king.color, Color::Black);
    assert_eq!(
        game.history().last().unwrap().captured.map(|p| p.kind),
        Some(PieceKind::Knight)
    );

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains(
        "12) Black's move (Player 2):\nBlack King on e8 captures White Knight on f7.\n"
    ));
}

#[test]
fn relaxed_turns_accept_two_moves_by_one_side() {
    let moves = vec![
        ("e2".to_string(), "e4".to_string()),
        ("d2".to_string(), "d4".to_string()),
    ];
    let options = GameOptions {
        enforce_turn_order: false,
    };
    let mut session = Session::new(Players::default(), options, Vec::new());
    let summary = session.run(&mut ReplaySource::new(moves)).unwrap();
    assert_eq!(summary.accepted, 2);

    let colors: Vec<Color> = session.game().history().iter().map(|e| e.color).collect();
    assert_eq!(colors, [Color::White, Color::Black]);
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Turn order is not enforced"));
    assert!(output.contains("2) Black's move (Player 2):\nMoving White Pawn from d2 to d4.\n"));
}
