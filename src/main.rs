use std::env;
use std::process::exit;

use sudoku_engine::{Difficulty, PuzzleRecord};

fn main() {
    let difficulty = match env::args().nth(1) {
        None => Difficulty::Normal,
        Some(arg) => match arg.parse() {
            Ok(difficulty) => difficulty,
            Err(_) => {
                eprintln!("unknown difficulty '{}', expected easy, normal or hard", arg);
                exit(1);
            }
        },
    };

    for _ in 0..3 {
        match PuzzleRecord::generate(difficulty) {
            Ok(record) => {
                println!("{} puzzle, {} clues:", difficulty, record.puzzle().n_clues());
                println!("{}\n", record.puzzle());
                println!("solution:");
                println!("{}\n", record.solution());
            }
            Err(err) => {
                eprintln!("{}", err);
                exit(1);
            }
        }
    }
}
