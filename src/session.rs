use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::GameError;

/// Number of guesses kept in the log, most recent first.
pub const GUESS_LOG_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed { cells: usize },
    /// Every safe cell is now revealed; the game still needs a correct guess.
    BoardCleared { cells: usize },
    HitMine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank guess, or the game is already over.
    Ignored,
    Correct,
    Wrong { remaining: u32 },
    OutOfGuesses,
}

/// One round of the word puzzle: a board with the secret spread over it, and
/// everything the player has done so far.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    board: Board,
    secret_word: String,
    cipher_word: String,
    revealed: BTreeSet<usize>,
    flagged: BTreeSet<usize>,
    remaining_guesses: u32,
    guess_log: VecDeque<String>,
    state: SessionState,
    status: String,
}

impl PuzzleSession {
    /// `board` is expected to already carry the cipher slots for `secret_word`.
    pub fn new(board: Board, secret_word: &str, cipher_word: &str, max_guesses: u32) -> Self {
        Self {
            board,
            secret_word: secret_word.to_ascii_uppercase(),
            cipher_word: cipher_word.to_string(),
            revealed: BTreeSet::new(),
            flagged: BTreeSet::new(),
            remaining_guesses: max_guesses,
            guess_log: VecDeque::with_capacity(GUESS_LOG_LEN),
            state: SessionState::Playing,
            status: "Reveal safe tiles to collect cipher letters.".to_string(),
        }
    }

    pub fn reveal(&mut self, index: usize) -> Result<RevealOutcome, GameError> {
        let is_mine = self.board.cell(index)?.is_mine();
        if self.state.is_finished() || self.flagged.contains(&index) || self.revealed.contains(&index)
        {
            return Ok(RevealOutcome::NoChange);
        }

        if is_mine {
            self.status = format!("You hit a mine! The correct word was {}.", self.secret_word);
            self.lose();
            return Ok(RevealOutcome::HitMine);
        }

        // Expand through zero cells; numbered cells are revealed but stop the fill
        let mut stack = vec![index];
        let mut cells = 0;
        while let Some(current) = stack.pop() {
            if !self.revealed.insert(current) {
                continue;
            }
            cells += 1;

            if self.board.cells()[current].adjacent_mines == 0 {
                stack.extend(self.board.neighbors(current).filter(|n| {
                    !self.revealed.contains(n)
                        && !self.flagged.contains(n)
                        && !self.board.cells()[*n].is_mine()
                }));
            }
        }
        debug!("Revealed {cells} cells from {index}");

        if self.is_cleared() {
            self.status =
                "All safe tiles revealed. Now decode the cipher and submit the final word."
                    .to_string();
            Ok(RevealOutcome::BoardCleared { cells })
        } else {
            Ok(RevealOutcome::Revealed { cells })
        }
    }

    pub fn toggle_flag(&mut self, index: usize) -> Result<MarkOutcome, GameError> {
        self.board.cell(index)?;
        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        if self.flagged.remove(&index) {
            Ok(MarkOutcome::Unflagged)
        } else {
            self.flagged.insert(index);
            Ok(MarkOutcome::Flagged)
        }
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        let guess = guess.trim().to_uppercase();
        if guess.is_empty() || self.state.is_finished() {
            return GuessOutcome::Ignored;
        }

        let correct = guess == self.secret_word;
        self.guess_log.push_front(guess);
        self.guess_log.truncate(GUESS_LOG_LEN);

        if correct {
            self.state = SessionState::Won;
            self.status = "Correct! The cipher is decoded. Well done.".to_string();
            info!("Puzzle solved with {} guesses left", self.remaining_guesses);
            return GuessOutcome::Correct;
        }

        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        if self.remaining_guesses == 0 {
            self.status = format!("Out of guesses! Final word unveiled: {}.", self.secret_word);
            self.lose();
            GuessOutcome::OutOfGuesses
        } else {
            self.status = format!(
                "Incorrect guess. {} {} remaining.",
                self.remaining_guesses,
                if self.remaining_guesses == 1 { "try" } else { "tries" }
            );
            GuessOutcome::Wrong {
                remaining: self.remaining_guesses,
            }
        }
    }

    fn lose(&mut self) {
        self.state = SessionState::Lost;
        self.revealed.extend(self.board.mine_indices());
        info!("Puzzle lost, the word was {}", self.secret_word);
    }

    /// Cipher letters uncovered so far, by position in the word.
    pub fn revealed_letters(&self) -> Vec<Option<char>> {
        let mut letters = vec![None; self.secret_word.len()];
        for slot in self
            .revealed
            .iter()
            .filter_map(|&index| self.board.cells()[index].cipher_slot)
        {
            if let Some(letter) = letters.get_mut(slot.word_position) {
                *letter = Some(slot.letter);
            }
        }
        letters
    }

    pub fn safe_revealed_count(&self) -> usize {
        self.revealed
            .iter()
            .filter(|&&index| !self.board.cells()[index].is_mine())
            .count()
    }

    pub fn is_cleared(&self) -> bool {
        self.safe_revealed_count() >= self.board.safe_cell_count()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn cipher_word(&self) -> &str {
        &self.cipher_word
    }

    pub fn revealed_cells(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    pub fn flagged_cells(&self) -> &BTreeSet<usize> {
        &self.flagged
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged.contains(&index)
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    pub fn guess_log(&self) -> impl Iterator<Item = &str> {
        self.guess_log.iter().map(String::as_str)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl fmt::Display for PuzzleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.board.cols();

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{:>2}", col % 100)?;
        }
        writeln!(f)?;

        for (row, cells) in self.board.cells().chunks(cols.max(1)).enumerate() {
            write!(f, "{row:>3} ")?;
            for cell in cells {
                let symbol = if self.is_revealed(cell.index) {
                    match (cell.is_mine(), cell.cipher_slot, cell.adjacent_mines) {
                        (true, _, _) => '*',
                        (false, Some(slot), _) => slot.letter,
                        (false, None, 0) => ' ',
                        (false, None, n) => char::from(b'0' + n),
                    }
                } else if self.is_flagged(cell.index) {
                    'F'
                } else {
                    '#'
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }

        let letters: String = self
            .revealed_letters()
            .into_iter()
            .map(|letter| letter.unwrap_or('_'))
            .collect();
        writeln!(f, "Cipher letters: {letters}")?;
        write!(f, "Guesses left: {}", self.remaining_guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CipherSlot;

    /// Board with cipher slots at fixed cells, letters taken from `cipher_word`.
    fn session(layout: &str, slots: &[usize], secret: &str, cipher_word: &str) -> PuzzleSession {
        let rows: Vec<&str> = layout.lines().map(str::trim).collect();
        let mines: Vec<bool> = rows.iter().flat_map(|r| r.chars().map(|c| c == '*')).collect();
        let board = Board::from_mines(rows.len(), rows[0].len(), &mines).unwrap();
        let board = board.with_slots(slots.iter().enumerate().map(|(j, &index)| {
            (
                index,
                CipherSlot {
                    letter: cipher_word.chars().nth(j).unwrap(),
                    plaintext_letter: secret.chars().nth(j).unwrap(),
                    word_position: j,
                },
            )
        }));
        PuzzleSession::new(board, secret, cipher_word, 5)
    }

    const LAYOUT: &str = "....*
                          ....*
                          .....
                          **...";

    #[test]
    fn test_flood_fill_stops_at_numbers() {
        let mut s = session(LAYOUT, &[0, 1], "HI", "KL");
        // Zero region in the top-left plus its numbered border
        assert_eq!(s.reveal(0), Ok(RevealOutcome::Revealed { cells: 12 }));
        let expected: BTreeSet<usize> = [0, 1, 2, 3, 5, 6, 7, 8, 10, 11, 12, 13].into();
        assert_eq!(s.revealed_cells(), &expected);
        // The zero cells at 18 and 19 are only reachable through numbered cells
        assert!(!s.is_revealed(18));
        assert_eq!(s.revealed_letters(), vec![Some('K'), Some('L')]);
    }

    #[test]
    fn test_numbered_cell_reveals_alone() {
        let mut s = session(LAYOUT, &[19], "A", "D");
        assert_eq!(s.reveal(3), Ok(RevealOutcome::Revealed { cells: 1 }));
        assert_eq!(s.revealed_cells().iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(s.revealed_letters(), vec![None]);
        assert_eq!(s.reveal(3), Ok(RevealOutcome::NoChange));
    }

    #[test]
    fn test_flag_blocks_reveal_and_fill() {
        let mut s = session(LAYOUT, &[0], "A", "D");
        assert_eq!(s.toggle_flag(1), Ok(MarkOutcome::Flagged));
        assert_eq!(s.reveal(1), Ok(RevealOutcome::NoChange));
        s.reveal(0).unwrap();
        assert!(!s.is_revealed(1));
        assert_eq!(s.toggle_flag(1), Ok(MarkOutcome::Unflagged));
        assert!(s.reveal(1).is_ok());
        assert!(s.is_revealed(1));
    }

    #[test]
    fn test_mine_loses_and_shows_mines() {
        let mut s = session(LAYOUT, &[0], "A", "D");
        assert_eq!(s.reveal(4), Ok(RevealOutcome::HitMine));
        assert_eq!(s.state(), SessionState::Lost);
        for mine in [4, 9, 15, 16] {
            assert!(s.is_revealed(mine));
        }
        assert_eq!(s.status(), "You hit a mine! The correct word was A.");
    }

    #[test]
    fn test_board_cleared_is_not_a_win() {
        let mut s = session(
            "..
             ..",
            &[0, 3],
            "OK",
            "RN",
        );
        assert_eq!(s.reveal(2), Ok(RevealOutcome::BoardCleared { cells: 4 }));
        assert_eq!(s.state(), SessionState::Playing);
        assert!(s.is_cleared());
        assert_eq!(s.revealed_letters(), vec![Some('R'), Some('N')]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut s = session(LAYOUT, &[0], "A", "D");
        assert_eq!(
            s.reveal(20),
            Err(GameError::OutOfBounds {
                index: 20,
                cells: 20
            })
        );
        assert!(s.toggle_flag(99).is_err());
    }

    #[test]
    fn test_guess_exhaustion() {
        let mut s = session(LAYOUT, &[0, 1, 2], "CAT", "FDW");
        for remaining in (1..5).rev() {
            assert_eq!(s.submit_guess("dog"), GuessOutcome::Wrong { remaining });
        }
        assert_eq!(s.submit_guess("cow"), GuessOutcome::OutOfGuesses);
        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.remaining_guesses(), 0);
        assert!(s.is_revealed(4));
        assert_eq!(s.status(), "Out of guesses! Final word unveiled: CAT.");
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut s = session(LAYOUT, &[0, 1, 2], "CAT", "FDW");
        assert_eq!(s.submit_guess("bat"), GuessOutcome::Wrong { remaining: 4 });
        assert_eq!(s.submit_guess("  cat "), GuessOutcome::Correct);
        assert_eq!(s.state(), SessionState::Won);
        assert_eq!(s.remaining_guesses(), 4);
        assert_eq!(s.guess_log().collect::<Vec<_>>(), vec!["CAT", "BAT"]);
    }

    #[test]
    fn test_blank_guess_is_ignored() {
        let mut s = session(LAYOUT, &[0], "A", "D");
        assert_eq!(s.submit_guess("   "), GuessOutcome::Ignored);
        assert_eq!(s.remaining_guesses(), 5);
        assert_eq!(s.guess_log().count(), 0);
    }

    #[test]
    fn test_guess_log_is_capped() {
        let mut s = PuzzleSession::new(
            Board::from_mines(1, 1, &[false]).unwrap(),
            "ZEBRA",
            "CHEUD",
            10,
        );
        for guess in ["a", "b", "c", "d", "e", "f", "g"] {
            s.submit_guess(guess);
        }
        assert_eq!(
            s.guess_log().collect::<Vec<_>>(),
            vec!["G", "F", "E", "D", "C"]
        );
    }

    #[test]
    fn test_terminal_state_is_locked() {
        let mut s = session(LAYOUT, &[0], "A", "D");
        s.submit_guess("a");
        assert_eq!(s.state(), SessionState::Won);

        let before = (s.revealed_cells().clone(), s.flagged_cells().clone(), s.remaining_guesses());
        assert_eq!(s.reveal(0), Ok(RevealOutcome::NoChange));
        assert_eq!(s.reveal(4), Ok(RevealOutcome::NoChange));
        assert_eq!(s.toggle_flag(2), Ok(MarkOutcome::NoChange));
        assert_eq!(s.submit_guess("b"), GuessOutcome::Ignored);
        assert_eq!(
            (s.revealed_cells().clone(), s.flagged_cells().clone(), s.remaining_guesses()),
            before
        );
        assert_eq!(s.state(), SessionState::Won);
    }

    #[test]
    fn test_display() {
        let mut s = session(
            ".*
             ..",
            &[2],
            "A",
            "D",
        );
        s.toggle_flag(1).unwrap();
        s.reveal(2).unwrap();
        let rendered = s.to_string();
        assert!(rendered.contains("  0  # F"), "{rendered}");
        assert!(rendered.contains("  1  D #"), "{rendered}");
        assert!(rendered.contains("Cipher letters: D"));
    }
}
