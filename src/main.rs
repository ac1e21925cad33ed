use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_core::{Board, HeuristicAgent, MoveSource, Side};

mod console;
use console::{draw_board, HumanPlayer};

fn make_player(ai: bool, side: Side) -> Box<dyn MoveSource> {
    if ai {
        Box::new(HeuristicAgent::new(side))
    } else {
        Box::new(HumanPlayer)
    }
}

fn main() -> Result<()> {
    let mut board = Board::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut player_one = make_player(ai_players.0, Side::PlayerOne);
    let mut player_two = make_player(ai_players.1, Side::PlayerTwo);

    let mut side = Side::PlayerOne;

    // game loop
    loop {
        draw_board(&board).expect("Failed to draw board!");

        let (source, is_ai) = match side {
            Side::PlayerOne => (player_one.as_mut(), ai_players.0),
            Side::PlayerTwo => (player_two.as_mut(), ai_players.1),
        };

        if is_ai {
            println!("AI is thinking...");
            stdout().flush().expect("Failed to flush to stdout!");

            // slow down play if both players are AI
            if ai_players == (true, true) {
                std::thread::sleep(std::time::Duration::new(1, 0));
            }
        }

        let next_move = source.next_column(&board)?;
        if is_ai {
            println!("AI plays column {}", next_move + 1);
        }

        let won = match board.apply_move(next_move, side) {
            Ok((_row, won)) => won,
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
        };

        // end states
        if won {
            draw_board(&board).expect("Failed to draw board!");
            let player = match side {
                Side::PlayerOne => 1,
                Side::PlayerTwo => 2,
            };
            if is_ai {
                println!("I'm sorry, but you lost. Player {} wins!", player);
            } else {
                println!("Congratulations! Player {} wins!", player);
            }
            break;
        }

        if board.turns_taken() == board.max_turns() {
            draw_board(&board).expect("Failed to draw board!");
            println!("It's a draw!");
            break;
        }

        side = side.opponent();
    }
    Ok(())
}
