use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use std::cmp::Ordering;

use crate::board::{Board, Side};
use crate::player::MoveSource;
use crate::WIDTH;

// point values for the one-ply column ranking
const RUN_OF_ONE: i32 = 25;
const RUN_OF_TWO: i32 = 50;
const RUN_OF_THREE: i32 = 75;
const DECISIVE: i32 = 1000;

fn run_points(score: usize) -> i32 {
    match score {
        0 => 0,
        1 => RUN_OF_ONE,
        2 => RUN_OF_TWO,
        3 => RUN_OF_THREE,
        _ => DECISIVE,
    }
}

/// The rule-based computer opponent.
///
/// Each candidate column is scored one ply ahead: points for the run
/// the agent would build there, minus points for the run the opponent
/// would build in the same column. An immediate win scores the
/// decisive value, and a column where the opponent would complete four
/// in a row is forced to the decisive value as well, so the block is
/// never ignored. Ties are broken uniformly at random.
pub struct HeuristicAgent {
    side: Side,
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rng: StdRng::from_os_rng(),
        }
    }

    /// The side this agent plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Pick a column for the agent's next move. At least one column
    /// must still be open.
    pub fn choose_move(&mut self, board: &Board) -> usize {
        let mut best_value = 0;
        let mut best_columns: Vec<usize> = Vec::new();

        for column in 0..WIDTH {
            let offense = board.score_hypothetical_move(column, self.side);
            if offense == 0 {
                // full column, never a candidate
                continue;
            }
            let defense = board.score_hypothetical_move(column, self.side.opponent());

            let value = if defense >= 4 {
                // the opponent completes four in a row here
                DECISIVE
            } else {
                (run_points(offense) - run_points(defense)).max(0)
            };

            match value.cmp(&best_value) {
                Ordering::Greater => {
                    best_value = value;
                    best_columns.clear();
                    best_columns.push(column);
                }
                Ordering::Equal => best_columns.push(column),
                Ordering::Less => {}
            }
        }

        assert!(
            !best_columns.is_empty(),
            "choose_move called with no open columns"
        );
        best_columns[self.rng.random_range(0..best_columns.len())]
    }
}

impl MoveSource for HeuristicAgent {
    fn next_column(&mut self, board: &Board) -> Result<usize> {
        Ok(self.choose_move(board))
    }
}
