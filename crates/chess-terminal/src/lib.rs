//! Chess Terminal - play or replay two-player chess games on a text console.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration: player names, default move list, rule switches
//! - [`moves_file`] - JSON move lists for replays
//! - [`render`] - Text rendering of boards, titles and history
//! - [`session`] - Feeding typed or recorded moves into a game

pub mod config;
pub mod moves_file;
pub mod render;
pub mod session;
