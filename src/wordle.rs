//! Wordle rules: guess validation, per-letter feedback and the 6×5 board.

use crate::error::GuessError;
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};

pub const WORD_LENGTH: usize = 5;
pub const MAX_GUESSES: usize = 6;

pub const WIN_MESSAGE: &str = "You genius!!! You win!!";

/// Verdict for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,  // Gray
    Present, // Yellow
    Correct, // Green
}

impl Feedback {
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Compare a guess against the answer position by position.
///
/// A letter that appears anywhere in the answer is `Present` at every
/// non-matching position; repeated letters are not counted off.
#[must_use]
pub fn score_guess(guess: &str, answer: &str) -> [Feedback; WORD_LENGTH] {
    let mut feedback = [Feedback::Absent; WORD_LENGTH];
    let answer_chars: Vec<char> = answer.chars().collect();

    for (i, g) in guess.chars().enumerate().take(WORD_LENGTH) {
        feedback[i] = if answer_chars.get(i) == Some(&g) {
            Feedback::Correct
        } else if answer_chars.contains(&g) {
            Feedback::Present
        } else {
            Feedback::Absent
        };
    }
    feedback
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Best verdict seen so far for each letter, as shown on the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardColors {
    colors: [Option<Feedback>; 26],
}

impl KeyboardColors {
    /// Record a verdict. A weaker verdict never replaces a stronger one
    /// (`Correct` beats `Present` beats `Absent`).
    pub fn record(&mut self, letter: char, feedback: Feedback) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.colors[i])
            && slot.is_none_or(|current| feedback > current)
        {
            *slot = Some(feedback);
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        Self::index(letter).and_then(|i| self.colors[i])
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: String,
    pub feedback: [Feedback; WORD_LENGTH],
    pub status: GameStatus,
}

/// One Wordle game: the hidden answer, the board and a row/column cursor.
#[derive(Debug, Clone)]
pub struct WordleGame {
    answer: String,
    grid: [[Tile; WORD_LENGTH]; MAX_GUESSES],
    current_row: usize,
    current_col: usize,
    keyboard: KeyboardColors,
    status: GameStatus,
}

impl WordleGame {
    #[must_use]
    pub fn new(answer: &str) -> Self {
        info_log!("WordleGame::new() - new game started");
        Self {
            answer: answer.to_ascii_uppercase(),
            grid: [[Tile::default(); WORD_LENGTH]; MAX_GUESSES],
            current_row: 0,
            current_col: 0,
            keyboard: KeyboardColors::default(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn grid(&self) -> &[[Tile; WORD_LENGTH]; MAX_GUESSES] {
        &self.grid
    }

    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardColors {
        &self.keyboard
    }

    /// Guesses accepted so far, oldest first.
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        self.grid
            .iter()
            .filter(|row| row.iter().all(|tile| tile.feedback.is_some()))
            .map(|row| row.iter().filter_map(|tile| tile.letter).collect())
            .collect()
    }

    /// Letters typed into the current row.
    #[must_use]
    pub fn current_entry(&self) -> String {
        self.grid
            .get(self.current_row)
            .map(|row| row.iter().filter_map(|tile| tile.letter).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(WIN_MESSAGE.to_string()),
            GameStatus::Lost => Some(format!(
                "Better luck next time. The word to guess is {}",
                self.answer
            )),
        }
    }

    /// Type a letter into the next free tile. Returns false when the row is
    /// full, the game is over or the character is not a letter.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.status.is_over() || self.current_col >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.grid[self.current_row][self.current_col].letter = Some(letter.to_ascii_uppercase());
        self.current_col += 1;
        true
    }

    /// Clear the most recently typed tile.
    pub fn remove_letter(&mut self) -> bool {
        if self.status.is_over() || self.current_col == 0 {
            return false;
        }
        self.current_col -= 1;
        self.grid[self.current_row][self.current_col].letter = None;
        true
    }

    /// Validate whatever is typed in the current row.
    pub fn submit_row(&mut self, bank: &WordBank) -> Result<GuessOutcome, GuessError> {
        let entry = self.current_entry();
        self.check_guess(&entry, bank)
    }

    /// Validate a whole guess and, when accepted, score it into the current row.
    ///
    /// Checks run in order: game still running, length, letters only, known
    /// word. A rejected guess leaves the board untouched.
    pub fn check_guess(&mut self, guess: &str, bank: &WordBank) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let length = guess.chars().count();
        if length < WORD_LENGTH {
            return Err(GuessError::TooShort);
        }
        if length > WORD_LENGTH {
            return Err(GuessError::TooLong);
        }
        if !guess.chars().all(char::is_alphabetic) {
            return Err(GuessError::InvalidInput);
        }
        let guess = guess.to_ascii_uppercase();
        if !bank.contains(&guess) {
            debug_log!("check_guess() - '{}' is not in the word bank", guess);
            return Err(GuessError::InvalidWord);
        }

        let feedback = score_guess(&guess, &self.answer);
        let row = &mut self.grid[self.current_row];
        for ((tile, letter), verdict) in row.iter_mut().zip(guess.chars()).zip(feedback) {
            tile.letter = Some(letter);
            tile.feedback = Some(verdict);
            self.keyboard.record(letter, verdict);
        }

        self.current_row += 1;
        self.current_col = 0;
        self.status = if guess == self.answer {
            GameStatus::Won
        } else if self.current_row >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        info_log!(
            "check_guess() - row {} scored {:?}, status {:?}",
            self.current_row,
            feedback,
            self.status
        );

        Ok(GuessOutcome {
            guess,
            feedback,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::{WordLists, load_words_from_str};

    fn bank() -> WordBank {
        WordBank::new(&WordLists {
            common: load_words_from_str("crane\nslate\nspeed"),
            all: load_words_from_str("trace\nreact\nabbey\nkeeps\nhouse\nghost\nmouse\nplumb"),
            pangrams: Vec::new(),
        })
        .unwrap()
    }

    use Feedback::{Absent, Correct, Present};

    #[test]
    fn test_score_guess_exact_match() {
        assert_eq!(score_guess("CRANE", "CRANE"), [Correct; 5]);
    }

    #[test]
    fn test_score_guess_mixed() {
        // TRACE vs CRANE: T absent, R/A/E in place, C elsewhere
        assert_eq!(
            score_guess("TRACE", "CRANE"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn test_score_guess_repeated_letters_not_counted_off() {
        // Both E's of KEEPS are in SPEED; the stray S and P are present too.
        assert_eq!(
            score_guess("KEEPS", "SPEED"),
            [Absent, Present, Correct, Present, Present]
        );
        // ABBEY has one B in place and the other B reported present.
        assert_eq!(
            score_guess("ABBEY", "BOBBY"),
            [Absent, Present, Correct, Absent, Correct]
        );
    }

    #[test]
    fn test_feedback_chars() {
        assert_eq!(Correct.to_char(), 'G');
        assert_eq!(Present.to_char(), 'Y');
        assert_eq!(Absent.to_char(), 'X');
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        assert_eq!(game.check_guess("CRAN", &bank), Err(GuessError::TooShort));
        assert_eq!(game.check_guess("", &bank), Err(GuessError::TooShort));
        assert_eq!(game.check_guess("CRANES", &bank), Err(GuessError::TooLong));
        assert_eq!(game.current_row(), 0);
    }

    #[test]
    fn test_rejects_non_letters_before_word_lookup() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        assert_eq!(game.check_guess("CR4NE", &bank), Err(GuessError::InvalidInput));
        assert_eq!(game.check_guess("CR NE", &bank), Err(GuessError::InvalidInput));
        assert_eq!(game.check_guess("ZZZZZ", &bank), Err(GuessError::InvalidWord));
        // Accented letters are letters, just not in the word bank.
        assert_eq!(game.check_guess("crème", &bank), Err(GuessError::InvalidWord));
        assert_eq!(game.current_row(), 0);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_correct_guess_wins() {
        let bank = bank();
        let mut game = WordleGame::new("crane");
        let outcome = game.check_guess("crane", &bank).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.feedback, [Correct; 5]);
        assert_eq!(game.end_message().as_deref(), Some(WIN_MESSAGE));
        assert_eq!(game.check_guess("SLATE", &bank), Err(GuessError::GameOver));
    }

    #[test]
    fn test_six_misses_lose() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        for guess in ["SLATE", "TRACE", "REACT", "HOUSE", "GHOST"] {
            let outcome = game.check_guess(guess, &bank).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress);
        }
        let last = game.check_guess("MOUSE", &bank).unwrap();
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(game.guesses().len(), MAX_GUESSES);
        assert_eq!(
            game.end_message().unwrap(),
            "Better luck next time. The word to guess is CRANE"
        );
    }

    #[test]
    fn test_win_on_last_row() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        for guess in ["SLATE", "TRACE", "REACT", "HOUSE", "GHOST"] {
            game.check_guess(guess, &bank).unwrap();
        }
        assert_eq!(game.check_guess("CRANE", &bank).unwrap().status, GameStatus::Won);
    }

    #[test]
    fn test_cursor_editing_and_submit() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        for c in "slatex".chars() {
            game.add_letter(c);
        }
        assert_eq!(game.current_entry(), "SLATE");
        assert_eq!(game.current_col(), WORD_LENGTH);

        assert!(game.remove_letter());
        assert_eq!(game.current_entry(), "SLAT");
        assert_eq!(game.submit_row(&bank), Err(GuessError::TooShort));

        assert!(game.add_letter('e'));
        let outcome = game.submit_row(&bank).unwrap();
        assert_eq!(outcome.guess, "SLATE");
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.tile(0, 2).unwrap().feedback, Some(Correct));
        assert_eq!(game.guesses(), vec!["SLATE".to_string()]);
    }

    #[test]
    fn test_add_letter_rejects_non_letters() {
        let mut game = WordleGame::new("CRANE");
        assert!(!game.add_letter('4'));
        assert!(!game.remove_letter());
        assert_eq!(game.current_col(), 0);
    }

    #[test]
    fn test_keyboard_colors_keep_strongest_verdict() {
        let mut keyboard = KeyboardColors::default();
        keyboard.record('a', Present);
        keyboard.record('A', Absent);
        assert_eq!(keyboard.get('a'), Some(Present));
        keyboard.record('a', Correct);
        keyboard.record('a', Present);
        assert_eq!(keyboard.get('A'), Some(Correct));
        assert_eq!(keyboard.get('b'), None);
        assert_eq!(keyboard.get('1'), None);
    }

    #[test]
    fn test_keyboard_updated_by_guesses() {
        let bank = bank();
        let mut game = WordleGame::new("CRANE");
        game.check_guess("TRACE", &bank).unwrap();
        assert_eq!(game.keyboard().get('T'), Some(Absent));
        assert_eq!(game.keyboard().get('C'), Some(Present));
        assert_eq!(game.keyboard().get('R'), Some(Correct));
        game.check_guess("CRANE", &bank).unwrap();
        assert_eq!(game.keyboard().get('C'), Some(Correct));
    }
}
