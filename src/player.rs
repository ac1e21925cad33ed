use anyhow::Result;

use crate::board::Board;

/// A producer of column choices for one side of the game.
///
/// The human-facing implementation forwards whatever the user entered
/// for the engine to validate; the automated implementation computes a
/// legal move itself.
pub trait MoveSource {
    /// The column this source wants to play next.
    fn next_column(&mut self, board: &Board) -> Result<usize>;
}
