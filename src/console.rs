use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_core::{Board, Cell, MoveSource, HEIGHT, WIDTH};

/// Draw the board in place: a column header, then one colored token
/// per cell with row 0 at the bottom.
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

            stdout.queue(MoveTo(pos_x, pos_y))?.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(column, row) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

/// The human-driven side: prompts on stdin and forwards the entered
/// column for the engine to validate.
pub struct HumanPlayer;

impl MoveSource for HumanPlayer {
    fn next_column(&mut self, _board: &Board) -> Result<usize> {
        let stdin = stdin();
        loop {
            print!("Drop a token in which column? (1-{}) > ", WIDTH);
            stdout().flush()?;

            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            match input_str.trim().parse::<usize>() {
                // an entry of 0 wraps around and is rejected by the
                // engine as out of range
                Ok(column_one_indexed) => return Ok(column_one_indexed.wrapping_sub(1)),
                Err(_) => println!("Invalid number: {}", input_str.trim()),
            }
        }
    }
}
