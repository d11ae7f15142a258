//! Console front end for the omok engine
//!
//! Thin turn loop: renders the board as plain text, reads human moves from
//! stdin, and commits both players' moves through the library surface.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::warn;

use omok::rules::winning_line;
use omok::{Board, Engine, EngineError, Pos, Stone, BOARD_SIZE};

#[derive(Parser)]
#[command(name = "omok", about = "Play five-in-a-row against the engine")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = 7)]
    depth: i8,

    /// Evaluation cache size in megabytes
    #[arg(long, default_value_t = 16)]
    cache_mb: usize,

    /// Let the engine make the opening move
    #[arg(long)]
    ai_first: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut board = Board::new();
    let mut engine = Engine::with_config(args.depth, args.cache_mb);

    println!("omok - you are X, the engine is O");
    println!("enter moves as: row col (0-{})", BOARD_SIZE - 1);

    if args.ai_first {
        if let Err(err) = ai_turn(&mut engine, &mut board) {
            println!("engine error: {err}");
            return Ok(());
        }
    }

    let stdin = io::stdin();
    loop {
        draw_board(&board, &[]);

        let human = match read_move(&stdin, &board) {
            Some(pos) => pos,
            None => {
                println!("bye");
                return Ok(());
            }
        };
        if let Err(err) = board.try_place(human, Stone::Human) {
            println!("{err}");
            continue;
        }

        if let Some(line) = winning_line(&board, human, Stone::Human) {
            draw_board(&board, &line);
            println!("you win!");
            return Ok(());
        }
        if board.is_full() {
            draw_board(&board, &[]);
            println!("draw");
            return Ok(());
        }

        match ai_turn(&mut engine, &mut board) {
            Ok(Some(line)) => {
                draw_board(&board, &line);
                println!("the engine wins!");
                return Ok(());
            }
            Ok(None) => {}
            Err(EngineError::BoardFull) => {
                draw_board(&board, &[]);
                println!("draw");
                return Ok(());
            }
            Err(err) => {
                warn!("search failed: {err}");
                println!("engine error: {err}");
                return Ok(());
            }
        }
    }
}

/// Run one engine turn. Returns the winning line if the move won the game.
fn ai_turn(engine: &mut Engine, board: &mut Board) -> Result<Option<[Pos; 5]>, EngineError> {
    let mov = engine.find_best_move(board)?;
    board.try_place(mov, Stone::Ai)?;
    println!("engine plays {} {}", mov.row, mov.col);
    Ok(winning_line(board, mov, Stone::Ai))
}

/// Read and validate a human move. `None` means end of input.
fn read_move(stdin: &io::Stdin, board: &Board) -> Option<Pos> {
    loop {
        print!("your move> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            return None;
        }

        let mut parts = line.split_whitespace();
        let (row, col) = match (
            parts.next().and_then(|t| t.parse::<i32>().ok()),
            parts.next().and_then(|t| t.parse::<i32>().ok()),
        ) {
            (Some(r), Some(c)) => (r, c),
            _ => {
                println!("expected: row col");
                continue;
            }
        };

        match Pos::try_from_coords(row, col) {
            Ok(pos) if board.is_empty(pos) => return Some(pos),
            Ok(pos) => println!(
                "{}",
                EngineError::Occupied {
                    row: pos.row,
                    col: pos.col
                }
            ),
            Err(err) => println!("{err}"),
        }
    }
}

/// Render the board, marking `highlight` cells (a winning line) with '*'.
fn draw_board(board: &Board, highlight: &[Pos]) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{col:>2} ");
    }
    println!();

    for row in 0..BOARD_SIZE {
        print!("{row:>2} ");
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            let mark = if highlight.contains(&pos) {
                '*'
            } else {
                match board.get(pos) {
                    Stone::Human => 'X',
                    Stone::Ai => 'O',
                    Stone::Empty => '.',
                }
            };
            print!(" {mark} ");
        }
        println!();
    }
}
