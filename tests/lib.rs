use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

use sudoku_engine::{
    Cell, Difficulty, Digit, Error, Game, Grid, Placement, PuzzlePool, PuzzleRecord,
};

fn grid(line: &str) -> Grid {
    Grid::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err))
}

#[test]
fn solve_1() {
    // https://projecteuler.net/problem=96, grid 01
    let puzzle = grid("..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..");
    let solution = grid("483921657967345821251876493548132976729564138136798245372689514814253769695417382");

    let mut board = puzzle;
    assert!(board.solve());
    assert_eq!(board, solution);

    // the borrowing variant leaves the puzzle alone
    assert_eq!(puzzle.solution(), Some(solution));
    assert_eq!(puzzle.n_clues(), 32);
}

#[test]
fn solve_leaves_no_trace_on_failure() {
    // the top row is missing 7, 8 and 9, but all three sit in the last
    // column already: no completion exists
    let mut puzzle = Grid::empty();
    for (col, num) in (0..6).zip(1..=6) {
        puzzle.set(Cell::from_row_col(0, col), Some(Digit::new(num)));
    }
    for (row, num) in (3..6).zip(7..=9) {
        puzzle.set(Cell::from_row_col(row, 8), Some(Digit::new(num)));
    }

    let before = puzzle;
    assert!(!puzzle.solve());
    assert_eq!(puzzle, before);
    assert_eq!(puzzle.solution(), None);
}

#[test]
fn duplicate_sweep_catches_tampering() {
    let solved = grid("483921657967345821251876493548132976729564138136798245372689514814253769695417382");
    assert!(solved.is_solved_grid());

    // overwrite one cell with a digit its row already has
    let mut tampered = solved;
    tampered.set(Cell::new(0), Some(Digit::new(3)));
    assert!(tampered.is_filled());
    assert!(!tampered.has_no_duplicates());
    assert!(!tampered.is_solved_grid());
}

// this test is probabilistic in nature
// if an error occurs, note down the sudoku that it generated
#[test]
fn generate_filled_correctness() {
    for _ in 0..200 {
        let board = Grid::generate_filled().unwrap();
        if !board.is_solved_grid() {
            panic!(
                "Randomly generated an invalid board. Please save the board for debugging:\n{}",
                board.to_str_line()
            );
        }
    }
}

// this test is probabilistic in nature
// if an error occurs, note down the boards that it generated
#[test]
fn generated_boards_differ() {
    let mut boards: Vec<Grid> = (0..50)
        .map(|_| Grid::generate_filled().unwrap())
        .collect();
    boards.sort_by_key(|board| board.to_bytes());

    for pair in boards.windows(2) {
        if pair[0] == pair[1] {
            panic!(
                "\nRandomly generated the same board twice. This is possible, but very unlikely. Please save the board for debugging:\n{}",
                pair[0].to_str_line()
            );
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let board = Grid::generate_filled_with(&mut StdRng::seed_from_u64(42)).unwrap();
    let same = Grid::generate_filled_with(&mut StdRng::seed_from_u64(42)).unwrap();
    let other = Grid::generate_filled_with(&mut StdRng::seed_from_u64(43)).unwrap();

    assert_eq!(board, same);
    assert_ne!(board, other);

    let puzzle = board.carve_puzzle_with(Difficulty::Hard, &mut StdRng::seed_from_u64(1)).unwrap();
    let same_puzzle = board.carve_puzzle_with(Difficulty::Hard, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(puzzle, same_puzzle);
}

#[test]
fn carved_puzzles_keep_their_promises() {
    let solution = Grid::generate_filled().unwrap();

    for difficulty in Difficulty::iter() {
        let puzzle = solution.carve_puzzle(difficulty).unwrap();

        assert_eq!(puzzle.n_clues(), difficulty.clue_count());
        assert!(puzzle.solution().is_some());

        // givens are a subset of the solution
        for cell in Cell::all() {
            match puzzle.get(cell) {
                Some(digit) => assert_eq!(solution.get(cell), Some(digit)),
                None => {}
            }
        }
    }
}

#[test]
fn carving_a_contradictory_grid_fails() {
    // row r holds nothing but the digit r+1; the board is full, so carving
    // starts, but no removal survives the solver check
    let mut bytes = [0; 81];
    for (cell, num) in bytes.iter_mut().enumerate() {
        *num = (cell / 9) as u8 + 1;
    }
    let striped = Grid::from_bytes(bytes).unwrap();

    assert_eq!(striped.carve_puzzle(Difficulty::Easy), Err(Error::CarveFailure));
    assert_eq!(striped.carve_puzzle(Difficulty::Hard), Err(Error::CarveFailure));
}

#[test]
fn pool_stocks_every_tier() {
    let mut rng = StdRng::seed_from_u64(8);
    let pool = PuzzlePool::build_with(2, &mut rng).unwrap();

    assert_eq!(pool.len(), 6);
    assert!(!pool.is_empty());
    for difficulty in Difficulty::iter() {
        let records = pool.tier(difficulty);
        assert_eq!(records.len(), 2);
        for record in records {
            assert_eq!(record.difficulty(), difficulty);
            assert_eq!(record.puzzle().n_clues(), difficulty.clue_count());
            assert!(record.solution().is_solved_grid());
        }
    }
}

#[test]
fn play_through_a_whole_puzzle() {
    let mut rng = StdRng::seed_from_u64(12);
    let record = PuzzleRecord::generate_with(Difficulty::Easy, &mut rng).unwrap();
    let solution = *record.solution();
    let mut game = Game::new(record);

    let mut last = None;
    for cell in Cell::all() {
        if game.is_given(cell) {
            continue;
        }
        let digit = match solution.get(cell) {
            Some(digit) => digit,
            None => unreachable!("solutions are always filled"),
        };

        // a wrong digit first, it has to bounce off
        let wrong = Digit::new(digit.get() % 9 + 1);
        assert_eq!(game.enter(cell, wrong), Placement::Incorrect);
        assert!(!game.is_won());

        match game.enter(cell, digit) {
            outcome @ Placement::Correct { .. } => last = Some(outcome),
            other => panic!("correct digit rejected at cell {}: {:?}", cell.get(), other),
        }
    }

    // the closing entry completes its row, column and box in one go
    assert_eq!(last, Some(Placement::Correct { awarded: 600, solved: true }));
    assert!(game.is_won());
    assert_eq!(*game.board(), solution);

    // 41 open cells at easy, each worth at least the base points
    assert!(game.score() >= 41 * 100);
}

#[test]
fn difficulty_names_parse_both_ways() {
    assert_eq!("hard".parse(), Ok(Difficulty::Hard));
    assert_eq!(Difficulty::Easy.to_string(), "easy");
    assert!("impossible".parse::<Difficulty>().is_err());
}

#[test]
fn error_messages_name_the_budget() {
    assert_eq!(
        Error::GenerationFailure.to_string(),
        "full board generation failed 10 times in a row"
    );
    assert_eq!(
        Error::CarveFailure.to_string(),
        "puzzle carving failed 10 times in a row"
    );
}

#[test]
fn readme() {
    let solution = Grid::generate_filled().unwrap();
    let puzzle = solution.carve_puzzle(Difficulty::Normal).unwrap();

    assert_eq!(puzzle.n_clues(), 32);
    assert!(puzzle.solution().is_some());

    println!("{}", puzzle);
    println!("{}", puzzle.to_str_line());
}
