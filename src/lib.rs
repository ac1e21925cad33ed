//! A console rendition of the board game 'Connect 4' against a
//! rule-based computer opponent.
//!
//! The engine owns the 7x6 grid and applies moves with win detection
//! anchored at the last-placed token; the agent ranks the candidate
//! columns one ply ahead with an offense/defense heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_core::{Board, HeuristicAgent, Side};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! let (row, won) = board.apply_move(3, Side::PlayerOne)?;
//! assert!((row, won) == (0, false));
//!
//! let mut agent = HeuristicAgent::new(Side::PlayerTwo);
//! let reply = agent.choose_move(&board);
//! assert!(board.is_column_open(reply));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod heuristic;

pub mod player;


pub use board::{Board, Cell, MoveError, Side};
pub use heuristic::HeuristicAgent;
pub use player::MoveSource;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of moves that fills the board
pub const MAX_TURNS: usize = WIDTH * HEIGHT;

// ensure that a run of four fits on the board in every axis
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
