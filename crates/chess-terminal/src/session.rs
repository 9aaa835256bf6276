//! Driving a game from a move source and showing it on a text sink.
//!
//! A [`MoveSource`] supplies commands one at a time, either typed by the
//! players ([`InteractiveSource`]) or taken from a recorded list
//! ([`ReplaySource`]). The [`Session`] feeds them to the game and writes the
//! board, outcomes and errors to its output.

use crate::config::Players;
use crate::moves_file::RecordedMove;
use crate::render::{render_board, render_history, render_title, Style};
use chess_core::{Color, MoveRequest};
use chess_engine::{Clock, Game, GameError, GameOptions, MoveOutcome, SystemClock};
use std::io::{self, BufRead, Write};

/// One instruction from a move source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move given as two designators.
    Move { source: String, destination: String },
    /// Show the move history.
    History,
    /// Restart from the initial position.
    NewGame,
    /// Stop the game.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

impl Command {
    /// Parses one line of player input.
    ///
    /// Moves may be typed as `e2 e4`, `e2-e4` or `e2e4`. Returns `None` for
    /// blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let command = match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Command::Quit,
            "history" | "h" => Command::History,
            "new" => Command::NewGame,
            _ => match MoveRequest::split_designators(line) {
                Some((source, destination)) => Command::Move {
                    source: source.to_string(),
                    destination: destination.to_string(),
                },
                None => Command::Unrecognized(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Supplies commands to a session.
pub trait MoveSource {
    /// Returns the next command, or `None` once the source is exhausted.
    fn next_command(&mut self) -> io::Result<Option<Command>>;

    /// Whether the session should print a prompt before asking.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Commands typed line by line.
pub struct InteractiveSource<R> {
    input: R,
}

impl<R: BufRead> InteractiveSource<R> {
    pub fn new(input: R) -> Self {
        InteractiveSource { input }
    }
}

impl<R: BufRead> MoveSource for InteractiveSource<R> {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(command) = Command::parse(&line) {
                return Ok(Some(command));
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Moves taken from a recorded list, optionally waiting for a line on
/// `pause` before each move after the first.
pub struct ReplaySource<R> {
    moves: std::vec::IntoIter<RecordedMove>,
    pause: Option<R>,
    played: usize,
}

impl ReplaySource<io::Empty> {
    /// Replays `moves` without pausing.
    pub fn new(moves: Vec<RecordedMove>) -> Self {
        ReplaySource {
            moves: moves.into_iter(),
            pause: None,
            played: 0,
        }
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Replays `moves`, reading a line from `pause` between them.
    pub fn with_pause(moves: Vec<RecordedMove>, pause: R) -> Self {
        ReplaySource {
            moves: moves.into_iter(),
            pause: Some(pause),
            played: 0,
        }
    }
}

impl<R: BufRead> MoveSource for ReplaySource<R> {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        let Some((source, destination)) = self.moves.next() else {
            return Ok(None);
        };
        if self.played > 0 {
            if let Some(pause) = self.pause.as_mut() {
                let mut line = String::new();
                pause.read_line(&mut line)?;
            }
        }
        self.played += 1;
        tracing::debug!(number = self.played, %source, %destination, "replaying move");
        Ok(Some(Command::Move {
            source,
            destination,
        }))
    }
}

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub invalid: usize,
}

/// A game played against an output sink.
pub struct Session<W, C: Clock = SystemClock> {
    game: Game<C>,
    players: Players,
    style: Style,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(players: Players, options: GameOptions, out: W) -> Self {
        Session::with_game(Game::with_options(options), players, out)
    }
}

impl<W: Write, C: Clock> Session<W, C> {
    pub fn with_game(game: Game<C>, players: Players, out: W) -> Self {
        Session {
            game,
            players,
            style: Style::Plain,
            out,
        }
    }

    /// Decorates boards and errors with `style`.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn game(&self) -> &Game<C> {
        &self.game
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays commands from `source` until it runs dry or asks to quit, then
    /// stops the game.
    pub fn run(&mut self, source: &mut dyn MoveSource) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.show_board("")?;
        if !self.game.options().enforce_turn_order {
            writeln!(self.out, "Turn order is not enforced: either side may move.")?;
        }

        loop {
            if source.is_interactive() {
                self.prompt()?;
            }
            let Some(command) = source.next_command()? else {
                break;
            };
            match command {
                Command::Quit => break,
                Command::History => {
                    let text = render_history(self.game.history(), self.game.started_at());
                    self.out.write_all(text.as_bytes())?;
                }
                Command::NewGame => {
                    self.game.setup_initial_position();
                    self.show_board("")?;
                }
                Command::Unrecognized(text) => {
                    summary.invalid += 1;
                    self.error(&format!(
                        "could not understand '{text}'. \
                         Type a move like 'e2 e4', 'history', 'new' or 'quit'."
                    ))?;
                }
                Command::Move {
                    source: from,
                    destination: to,
                } => match self.game.submit_move(&from, &to) {
                    Ok(outcome @ MoveOutcome::Accepted { .. }) => {
                        summary.accepted += 1;
                        self.show_board(&outcome.reason())?;
                    }
                    Ok(MoveOutcome::Rejected(rejection)) => {
                        summary.rejected += 1;
                        self.error(&format!("{from} -> {to}: {rejection}."))?;
                    }
                    Err(GameError::InvalidCoordinate(err)) => {
                        summary.invalid += 1;
                        self.error(&format!("{err}."))?;
                    }
                    Err(GameError::GameOver) => break,
                },
            }
        }

        self.game.stop();
        writeln!(
            self.out,
            "Game over after {} moves.",
            self.game.board().moves_played()
        )?;
        tracing::info!(?summary, "session finished");
        Ok(summary)
    }

    fn show_board(&mut self, message: &str) -> io::Result<()> {
        self.out.write_all(self.style.clear_screen().as_bytes())?;
        let title = render_title(
            self.game.board(),
            self.game.history().last(),
            &self.players,
            message,
        );
        self.out.write_all(title.as_bytes())?;
        let board = render_board(self.game.board(), self.style);
        self.out.write_all(board.as_bytes())?;
        self.out.flush()
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.error(&format!("Error: {message}")))
    }

    fn prompt(&mut self) -> io::Result<()> {
        let color: Color = self.game.current_turn();
        write!(
            self.out,
            "{} to move ({}) > ",
            color,
            self.players.name(color)
        )?;
        self.out.flush()
    }
}
