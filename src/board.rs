use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::{HEIGHT, MAX_TURNS, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

/// One of the two participants in a game.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// The grid token this side places.
    pub fn token(self) -> Cell {
        match self {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A rejected move, reported to the caller instead of being applied.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("invalid move, column out of range")]
    InvalidColumn,
    #[error("invalid move, column is full")]
    ColumnFull,
}

// the 8 scan directions as (dx, dy) steps, arranged in opposite pairs
// per axis: vertical, horizontal, diagonal /, diagonal \
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

// collapse the 8 directional run lengths into the 4 per-axis totals
fn axis_sums(runs: &[usize; 8]) -> [usize; 4] {
    [
        runs[0] + runs[1],
        runs[2] + runs[3],
        runs[4] + runs[5],
        runs[6] + runs[7],
    ]
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
        }
    }

    /// Replay a string of 1-indexed column digits, alternating sides
    /// starting from player one.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let side = if board.num_moves % 2 == 0 {
                        Side::PlayerOne
                    } else {
                        Side::PlayerTwo
                    };
                    let _ = board.apply_move(column - 1, side)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The token at (column, row). Row 0 is the bottom of the board.
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Drop a token for `side` into `column`. On success returns the
    /// row the token landed in and whether the move completed a run of
    /// four. A rejected move leaves the board untouched.
    pub fn apply_move(&mut self, column: usize, side: Side) -> Result<(usize, bool), MoveError> {
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.heights[column];
        if row >= HEIGHT {
            return Err(MoveError::ColumnFull);
        }

        self.cells[column + WIDTH * row] = side.token();
        self.heights[column] += 1;
        self.num_moves += 1;

        let runs = self.directional_runs(column, row, side);
        let won = axis_sums(&runs).iter().any(|&sum| sum + 1 >= 4);

        Ok((row, won))
    }

    /// Whether a move can still be played in `column`. An out-of-range
    /// column reports closed, this is an advisory query, not a mutator.
    pub fn is_column_open(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    pub fn turns_taken(&self) -> usize {
        self.num_moves
    }

    pub fn max_turns(&self) -> usize {
        MAX_TURNS
    }

    /// Rank a move for `side` in `column` without mutating the board:
    /// 1 plus the best axis total of the runs the landing cell would
    /// join, so 4 and above means the placement completes four in a
    /// row. A full or out-of-range column scores 0.
    pub fn score_hypothetical_move(&self, column: usize, side: Side) -> usize {
        if !self.is_column_open(column) {
            return 0;
        }
        let row = self.heights[column];

        let runs = self.directional_runs(column, row, side);
        1 + axis_sums(&runs).iter().copied().max().unwrap_or(0)
    }

    // Run lengths of `side` tokens next to (column, row) in each of the
    // 8 directions, walking at most 3 steps out. Each direction stops
    // independently at the first edge or non-matching cell; the anchor
    // cell itself is not counted.
    fn directional_runs(&self, column: usize, row: usize, side: Side) -> [usize; 8] {
        let token = side.token();
        let mut runs = [0; 8];

        for (direction, &(dx, dy)) in DIRECTIONS.iter().enumerate() {
            for step in 1..=3 {
                let x = column as i32 + dx * step;
                let y = row as i32 + dy * step;
                if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
                    break;
                }
                if self.cells[x as usize + WIDTH * y as usize] != token {
                    break;
                }
                runs[direction] = step as usize;
            }
        }
        runs
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
