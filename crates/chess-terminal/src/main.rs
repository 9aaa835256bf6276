use anyhow::Context;
use chess_terminal::config::TerminalConfig;
use chess_terminal::moves_file::load_moves;
use chess_terminal::render::Style;
use chess_terminal::session::{InteractiveSource, MoveSource, ReplaySource, Session};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess-terminal")]
#[command(about = "Two-player chess in the terminal")]
struct Cli {
    /// Configuration file [default: chess.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Let either side move at any time
    #[arg(long)]
    relaxed_turns: bool,
    /// Print without colors or screen clearing
    #[arg(long)]
    plain: bool,
    /// Log engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play by typing moves such as `e2 e4` (default)
    Play,
    /// Replay a recorded JSON move list
    Replay {
        /// Move list to replay, defaults to `moves_file` from the config
        file: Option<PathBuf>,
        /// Wait for Enter between moves
        #[arg(long)]
        pause: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(TerminalConfig::default_path);
    let mut config = TerminalConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if cli.relaxed_turns {
        config.enforce_turn_order = false;
    }
    tracing::info!(?config, "configuration loaded");

    let style = if cli.plain || !io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Ansi
    };
    let mut session = Session::new(config.players.clone(), config.game_options(), io::stdout())
        .with_style(style);
    let summary = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut source = InteractiveSource::new(io::stdin().lock());
            session.run(&mut source)?
        }
        Commands::Replay { file, pause } => {
            let path = file.unwrap_or_else(|| config.moves_file.clone());
            let moves =
                load_moves(&path).with_context(|| format!("loading {}", path.display()))?;
            let mut source: Box<dyn MoveSource> = if pause || config.pause_between_moves {
                Box::new(ReplaySource::with_pause(moves, io::stdin().lock()))
            } else {
                Box::new(ReplaySource::new(moves))
            };
            session.run(source.as_mut())?
        }
    };

    if summary.rejected + summary.invalid > 0 {
        eprintln!(
            "{} moves rejected, {} unreadable",
            summary.rejected, summary.invalid
        );
    }
    Ok(())
}
