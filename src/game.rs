//! Rules of a single play session: entries, pencil marks, hints, scoring.
//!
//! The session runs entirely against the answer key. A digit that
//! contradicts the solution is refused outright and never lands on the
//! board, so the board only ever holds givens and correct entries. Scoring
//! follows from that: every fresh correct entry is worth points, finishing
//! a row, column or box on the way earns a bonus.
//!
//! Rendering, input handling and timers are out of scope here; this module
//! is the part a frontend talks to.

use crate::board::{Cell, Digit, DigitSet, Grid};
use crate::consts::N_CELLS;
use crate::pool::PuzzleRecord;

/// Points for a correct digit entered into a cell that didn't hold it yet.
pub const ENTRY_POINTS: u32 = 100;

/// Bonus for an entry that completes its row, column or box. Paid at most
/// once per entry, even when several units finish at the same time.
pub const UNIT_BONUS_POINTS: u32 = 500;

/// Outcome of [`Game::enter`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    /// The digit matches the solution and is on the board now.
    Correct {
        /// Points this entry earned, `0` if the cell already held the digit.
        awarded: u32,
        /// Whether the board is completely solved after this entry.
        solved: bool,
    },
    /// The digit contradicts the solution. The board is unchanged.
    Incorrect,
    /// The cell holds a given clue and cannot be written to.
    Fixed,
}

/// A play session over one puzzle.
///
/// Keeps the in-play board, the pencil marks and the score. The underlying
/// [`PuzzleRecord`] is never modified; givens stay fixed for the whole
/// session.
#[derive(Clone)]
pub struct Game {
    record: PuzzleRecord,
    board: Grid,
    pencil_marks: [DigitSet; N_CELLS],
    score: u32,
}

impl Game {
    /// Starts a session with the board set to the puzzle's givens.
    pub fn new(record: PuzzleRecord) -> Game {
        Game {
            board: *record.puzzle(),
            record,
            pencil_marks: [DigitSet::NONE; N_CELLS],
            score: 0,
        }
    }

    /// Plays `digit` into `cell` and scores it against the solution.
    ///
    /// Correct entries land on the board and wipe the cell's pencil marks.
    /// A fresh entry earns [`ENTRY_POINTS`], plus [`UNIT_BONUS_POINTS`] if
    /// it completes the cell's row, column or box. Re-entering a digit the
    /// cell already holds is accepted but earns nothing.
    pub fn enter(&mut self, cell: Cell, digit: Digit) -> Placement {
        if self.is_given(cell) {
            return Placement::Fixed;
        }
        if self.record.solution().get(cell) != Some(digit) {
            return Placement::Incorrect;
        }

        let fresh = self.board.get(cell) != Some(digit);
        self.board.set(cell, Some(digit));
        self.pencil_marks[cell.as_index()].clear();

        let mut awarded = 0;
        if fresh {
            awarded += ENTRY_POINTS;
            if self.completes_unit(cell) {
                awarded += UNIT_BONUS_POINTS;
            }
            self.score += awarded;
        }

        Placement::Correct {
            awarded,
            solved: self.board.is_solved_grid(),
        }
    }

    /// Reveals the solution digit of an empty cell, without scoring.
    /// Returns `None` if the cell is already filled.
    pub fn hint(&mut self, cell: Cell) -> Option<Digit> {
        if self.board.get(cell).is_some() {
            return None;
        }
        let digit = self.record.solution().get(cell)?;
        self.board.set(cell, Some(digit));
        Some(digit)
    }

    /// Empties a cell and wipes its pencil marks. Returns whether anything
    /// could be cleared; givens can't.
    pub fn clear(&mut self, cell: Cell) -> bool {
        if self.is_given(cell) {
            return false;
        }
        self.board.set(cell, None);
        self.pencil_marks[cell.as_index()].clear();
        true
    }

    /// Notes a candidate digit in a non-given cell. Returns whether the
    /// mark was placed.
    pub fn pencil(&mut self, cell: Cell, digit: Digit) -> bool {
        if self.is_given(cell) {
            return false;
        }
        self.pencil_marks[cell.as_index()].insert(digit);
        true
    }

    /// Removes a single pencil mark.
    pub fn unpencil(&mut self, cell: Cell, digit: Digit) {
        self.pencil_marks[cell.as_index()].remove(digit);
    }

    /// Wipes all pencil marks in `cell`, leaving its value alone.
    pub fn clear_pencil(&mut self, cell: Cell) {
        self.pencil_marks[cell.as_index()].clear();
    }

    /// The pencil marks currently noted in `cell`.
    pub fn pencil_marks(&self, cell: Cell) -> DigitSet {
        self.pencil_marks[cell.as_index()]
    }

    /// Returns whether `cell` is one of the puzzle's given clues.
    pub fn is_given(&self, cell: Cell) -> bool {
        self.record.puzzle().get(cell).is_some()
    }

    /// Returns whether the board is completely and correctly filled.
    pub fn is_won(&self) -> bool {
        self.board.is_solved_grid()
    }

    /// The in-play board: givens plus everything entered so far.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The untouched puzzle the session started from.
    pub fn puzzle(&self) -> &Grid {
        self.record.puzzle()
    }

    /// The answer key.
    pub fn solution(&self) -> &Grid {
        self.record.solution()
    }

    /// Points scored so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    // a unit counts as complete once all nine cells are filled; entries
    // always match the solution, so filled means correctly filled
    fn completes_unit(&self, cell: Cell) -> bool {
        let row = (0..9).all(|col| self.filled(cell.row(), col));
        let col = (0..9).all(|row| self.filled(row, cell.col()));
        let (band, stack) = (cell.row() / 3 * 3, cell.col() / 3 * 3);
        let block = (band..band + 3).all(|r| (stack..stack + 3).all(|c| self.filled(r, c)));
        row || col || block
    }

    fn filled(&self, row: u8, col: u8) -> bool {
        self.board.get(Cell::from_row_col(row, col)).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::difficulty::Difficulty;

    const SOLVED: &str = "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    // a nearly finished board: only the four cells of the top left 2x2
    // corner are open
    fn corner_game() -> Game {
        let solution = Grid::from_str_line(SOLVED).unwrap();
        let mut puzzle = solution;
        for &(row, col) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            puzzle.set(Cell::from_row_col(row, col), None);
        }
        Game::new(PuzzleRecord::from_parts(puzzle, solution, Difficulty::Normal))
    }

    fn cell(row: u8, col: u8) -> Cell {
        Cell::from_row_col(row, col)
    }

    #[test]
    fn wrong_digit_is_refused() {
        let mut game = corner_game();
        let before = *game.board();

        assert_eq!(game.enter(cell(0, 0), Digit::new(9)), Placement::Incorrect);
        assert_eq!(*game.board(), before);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn givens_are_immutable() {
        let mut game = corner_game();

        assert_eq!(game.enter(cell(8, 8), Digit::new(5)), Placement::Fixed);
        assert!(!game.clear(cell(8, 8)));
        assert!(!game.pencil(cell(8, 8), Digit::new(1)));
        assert_eq!(game.board().get(cell(8, 8)), Some(Digit::new(5)));
    }

    #[test]
    fn correct_entries_score_and_win() {
        let mut game = corner_game();

        // (0,0) = 1 completes nothing: its row, column and box all have
        // another open cell
        assert_eq!(
            game.enter(cell(0, 0), Digit::new(1)),
            Placement::Correct { awarded: 100, solved: false }
        );

        // (0,1) = 2 closes the top row
        assert_eq!(
            game.enter(cell(0, 1), Digit::new(2)),
            Placement::Correct { awarded: 600, solved: false }
        );

        // (1,0) = 4 closes the leftmost column
        assert_eq!(
            game.enter(cell(1, 0), Digit::new(4)),
            Placement::Correct { awarded: 600, solved: false }
        );

        // (1,1) = 5 closes its row, column and box at once, the bonus is
        // still paid only once, and the board is done
        assert!(!game.is_won());
        assert_eq!(
            game.enter(cell(1, 1), Digit::new(5)),
            Placement::Correct { awarded: 600, solved: true }
        );
        assert!(game.is_won());
        assert_eq!(game.score(), 1900);
    }

    #[test]
    fn reentering_scores_nothing() {
        let mut game = corner_game();
        game.enter(cell(0, 0), Digit::new(1));
        assert_eq!(game.score(), 100);

        assert_eq!(
            game.enter(cell(0, 0), Digit::new(1)),
            Placement::Correct { awarded: 0, solved: false }
        );
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn hints_fill_without_scoring() {
        let mut game = corner_game();

        assert_eq!(game.hint(cell(1, 1)), Some(Digit::new(5)));
        assert_eq!(game.board().get(cell(1, 1)), Some(Digit::new(5)));
        assert_eq!(game.score(), 0);

        // occupied cells give no hint, givens included
        assert_eq!(game.hint(cell(1, 1)), None);
        assert_eq!(game.hint(cell(4, 4)), None);
    }

    #[test]
    fn clear_undoes_an_entry() {
        let mut game = corner_game();
        game.enter(cell(0, 0), Digit::new(1));

        assert!(game.clear(cell(0, 0)));
        assert_eq!(game.board().get(cell(0, 0)), None);
        // the points stay
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn pencil_marks_stick_until_entry() {
        let mut game = corner_game();
        let target = cell(0, 0);

        assert!(game.pencil(target, Digit::new(1)));
        assert!(game.pencil(target, Digit::new(7)));
        assert!(game.pencil_marks(target).contains(Digit::new(1)));
        assert_eq!(game.pencil_marks(target).len(), 2);

        game.unpencil(target, Digit::new(7));
        assert_eq!(game.pencil_marks(target).len(), 1);

        let other = cell(1, 1);
        game.pencil(other, Digit::new(3));
        game.clear_pencil(other);
        assert!(game.pencil_marks(other).is_empty());

        // a correct entry wipes the cell's marks
        game.enter(target, Digit::new(1));
        assert!(game.pencil_marks(target).is_empty());
    }

    #[test]
    fn win_by_hints_alone() {
        let mut game = corner_game();
        for &(row, col) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(game.hint(cell(row, col)).is_some());
        }
        assert!(game.is_won());
        assert_eq!(game.score(), 0);
    }
}
