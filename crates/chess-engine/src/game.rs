//! Game controller: turn order, move submission and history.
//!
//! The [`Game`] struct owns the [`Board`] and is the only code path that
//! mutates it:
//! - Every request is resolved, checked against the rules and either applied
//!   or rejected with a reason
//! - Accepted moves flip the turn and append a [`HistoryEntry`]
//! - Rejected moves leave board, turn and history untouched

use crate::rules::{MoveRules, StandardRules};
use crate::Board;
use chess_core::{Color, CoordinateError, Layout, MoveRequest, Piece, Square};
use chrono::{DateTime, Local};
use thiserror::Error;

/// Source of timestamps for history entries.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The side on turn when the move was made. With turn order relaxed this
    /// can differ from the color of the moved piece.
    pub color: Color,
    /// Short description, e.g. `Pawn: e2 -> e4`.
    pub description: String,
    /// When the move was accepted.
    pub timestamp: DateTime<Local>,
    /// The squares involved.
    pub request: MoveRequest,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece removed from the destination, if any.
    pub captured: Option<Piece>,
}

/// Why a move request was turned down. Rejections never change the game.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("no piece at source")]
    EmptySource,
    #[error("it is {0}'s turn")]
    WrongTurn(Color),
    #[error("destination holds a piece of the same color")]
    OwnPiece,
    #[error("illegal move for this piece")]
    IllegalMove,
    #[error("illegal attack for this piece")]
    IllegalCapture,
}

/// Result of submitting a move. Both variants carry a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Accepted { description: String },
    /// The move was refused.
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Returns the description of what happened or why it did not.
    pub fn reason(&self) -> String {
        match self {
            MoveOutcome::Accepted { description } => description.clone(),
            MoveOutcome::Rejected(rejection) => rejection.to_string(),
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Accepted { description } => f.write_str(description),
            MoveOutcome::Rejected(rejection) => write!(f, "{}", rejection),
        }
    }
}

/// Error type for game operations that cannot even be judged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// A designator did not name a square. Nothing changed.
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given side to move.
    AwaitingMove(Color),
    /// Stopped from outside. `forfeited_by` names the side that lost on a
    /// forfeit, and is `None` for a plain stop.
    GameOver { forfeited_by: Option<Color> },
}

/// Behavior switches for a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Reject moving a piece that does not belong to the side to move.
    pub enforce_turn_order: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            enforce_turn_order: true,
        }
    }
}

/// A two-player game with history tracking.
#[derive(Debug, Clone)]
pub struct Game<C: Clock = SystemClock, R: MoveRules = StandardRules> {
    board: Board,
    turn: Color,
    ended: Option<GameStatus>,
    history: Vec<HistoryEntry>,
    options: GameOptions,
    started_at: DateTime<Local>,
    clock: C,
    rules: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game in the starting position with default options.
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    /// Creates a new game in the starting position.
    pub fn with_options(options: GameOptions) -> Self {
        Game::with_clock(SystemClock, options)
    }
}

impl<C: Clock> Game<C, StandardRules> {
    /// Creates a new game in the starting position, stamping history with `clock`.
    pub fn with_clock(clock: C, options: GameOptions) -> Self {
        Game::with_rules(clock, StandardRules, options)
    }
}

impl<C: Clock, R: MoveRules> Game<C, R> {
    /// Creates a new game in the starting position under custom rules.
    pub fn with_rules(clock: C, rules: R, options: GameOptions) -> Self {
        let started_at = clock.now();
        let mut game = Game {
            board: Board::new(),
            turn: Color::White,
            ended: None,
            history: Vec::new(),
            options,
            started_at,
            clock,
            rules,
        };
        game.setup_initial_position();
        game
    }

    /// Replaces the board with `layout`, `to_move` to play. History is cleared.
    pub fn load_layout(&mut self, layout: &Layout, to_move: Color) {
        self.board = Board::from_layout(layout);
        self.turn = to_move;
        self.reset_record();
    }

    /// Restarts from the standard initial position with White to move.
    pub fn setup_initial_position(&mut self) {
        self.board.setup_initial_position();
        self.turn = Color::White;
        self.reset_record();
        tracing::info!("new game started");
    }

    fn reset_record(&mut self) {
        self.ended = None;
        self.history.clear();
        self.started_at = self.clock.now();
    }

    /// Returns a reference to the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Returns the side whose move it is (or would be, once the game is over).
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.ended.unwrap_or(GameStatus::AwaitingMove(self.turn))
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.ended.is_some()
    }

    /// Returns accepted moves in the order they were played.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns when the current game was set up.
    #[inline]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[inline]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Ends the game without a result. Later submissions fail with
    /// [`GameError::GameOver`].
    pub fn stop(&mut self) {
        if self.ended.is_none() {
            self.ended = Some(GameStatus::GameOver { forfeited_by: None });
            tracing::info!(moves = self.history.len(), "game stopped");
        }
    }

    /// Ends the game with `color` forfeiting, e.g. when its clock runs out.
    pub fn forfeit(&mut self, color: Color) {
        if self.ended.is_none() {
            self.ended = Some(GameStatus::GameOver {
                forfeited_by: Some(color),
            });
            tracing::info!(%color, "game forfeited");
        }
    }

    /// Resolves two designators and submits the move.
    pub fn submit_move(
        &mut self,
        source: &str,
        destination: &str,
    ) -> Result<MoveOutcome, GameError> {
        if self.ended.is_some() {
            return Err(GameError::GameOver);
        }
        let request = MoveRequest::from_designators(source, destination)?;
        self.submit(request)
    }

    /// Submits a resolved move request.
    pub fn submit(&mut self, request: MoveRequest) -> Result<MoveOutcome, GameError> {
        if self.ended.is_some() {
            return Err(GameError::GameOver);
        }

        let outcome = match self.judge(request) {
            Ok(()) => MoveOutcome::Accepted {
                description: self.commit(request),
            },
            Err(rejection) => {
                tracing::warn!(%request, %rejection, "move rejected");
                MoveOutcome::Rejected(rejection)
            }
        };
        Ok(outcome)
    }

    fn judge(&self, request: MoveRequest) -> Result<(), Rejection> {
        let MoveRequest {
            source,
            destination,
        } = request;
        let piece = self.board.piece_at(source).ok_or(Rejection::EmptySource)?;
        if self.options.enforce_turn_order && piece.color != self.turn {
            return Err(Rejection::WrongTurn(self.turn));
        }

        match self.board.piece_at(destination) {
            None if self.rules.is_legal_move(&self.board, source, destination) => Ok(()),
            None => Err(Rejection::IllegalMove),
            Some(target) if target.color == piece.color => Err(Rejection::OwnPiece),
            Some(_) if self.rules.is_legal_capture(&self.board, source, destination) => Ok(()),
            Some(_) => Err(Rejection::IllegalCapture),
        }
    }

    /// Applies an accepted request and returns its description.
    fn commit(&mut self, request: MoveRequest) -> String {
        let MoveRequest {
            source,
            destination,
        } = request;
        let Some(piece) = self.board.piece_at(source) else {
            unreachable!("accepted move from empty square {source}");
        };

        let mover = self.turn;
        let captured = self.board.apply_move(source, destination);
        let description = match captured {
            None => format!("Moving {} from {} to {}.", piece, source, destination),
            Some(target) => format!(
                "{} on {} captures {} on {}.",
                piece, source, target, destination
            ),
        };

        self.history.push(HistoryEntry {
            color: mover,
            description: format!("{}: {} -> {}", piece.kind, source, destination),
            timestamp: self.clock.now(),
            request,
            piece,
            captured,
        });
        self.turn = mover.opposite();
        tracing::info!(moves_played = self.board.moves_played(), "{}", description);
        description
    }
}
