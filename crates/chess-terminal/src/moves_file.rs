//! Loading recorded move lists.
//!
//! A move list is a JSON array of two-element string arrays, each holding a
//! source and a destination designator:
//!
//! ```json
//! [["e2", "e4"], ["e7", "e5"], ["g1", "f3"]]
//! ```
//!
//! Designators are not resolved here; the game reports bad ones when they
//! are played.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a move list.
#[derive(Error, Debug)]
pub enum MovesFileError {
    #[error("failed to read move list: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse move list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One recorded move: source and destination designators.
pub type RecordedMove = (String, String);

/// Parses a move list from JSON text.
pub fn parse_moves(json: &str) -> Result<Vec<RecordedMove>, MovesFileError> {
    let pairs: Vec<[String; 2]> = serde_json::from_str(json)?;
    Ok(pairs
        .into_iter()
        .map(|[source, destination]| (source, destination))
        .collect())
}

/// Reads and parses the move list at `path`.
pub fn load_moves(path: &Path) -> Result<Vec<RecordedMove>, MovesFileError> {
    let content = std::fs::read_to_string(path)?;
    let moves = parse_moves(&content)?;
    tracing::info!("loaded {} moves from {:?}", moves.len(), path);
    Ok(moves)
}
