//! Session loops that drive a game through a display interface.
//!
//! The loops own the game state and the word lists; front-ends only turn
//! input into `UserAction`s and render what they are handed.

use crate::error::{BeeError, GuessError};
use crate::spelling_bee::{SpellingBeeGame, Word};
use crate::wordbank::{WordBank, WordLists};
use crate::wordle::{GameStatus, GuessOutcome, WordleGame};
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Type one letter into the current entry.
    Letter(char),
    Backspace,
    /// Submit whatever has been typed so far.
    Submit,
    /// Submit a complete word at once.
    Guess(String),
    Shuffle,
    NewGame,
    Exit,
}

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub games_won: usize,
    pub words_found: usize,
}

/// Display adapter for Wordle.
pub trait WordleInterface {
    fn display_board(&mut self, game: &WordleGame);
    /// `None` when the input produced nothing to act on.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_rejection(&mut self, error: &GuessError);
    fn display_outcome(&mut self, game: &WordleGame, outcome: &GuessOutcome);
    fn display_game_over(&mut self, game: &WordleGame, message: &str);
    fn display_new_game_message(&mut self);
    fn display_exit_message(&mut self);
}

/// Display adapter for Spelling Bee.
pub trait SpellingBeeInterface {
    fn display_honeycomb(&mut self, game: &SpellingBeeGame);
    /// `None` when the input produced nothing to act on.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_rejection(&mut self, error: &BeeError);
    fn display_accepted(&mut self, word: &Word, game: &SpellingBeeGame);
    fn display_new_game_message(&mut self, game: &SpellingBeeGame);
    fn display_exit_message(&mut self);
}

pub fn wordle_loop<I, R>(bank: &WordBank, interface: &mut I, rng: &mut R) -> SessionSummary
where
    I: WordleInterface + ?Sized,
    R: Rng,
{
    let mut summary = SessionSummary::default();
    let mut game = WordleGame::new(bank.random_common_word(rng));
    let mut counted = false;
    interface.display_board(&game);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("wordle_loop() - action {:?}", action);

        let result = match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                if is_unfinished_attempt(&game, counted) {
                    summary.games_played += 1;
                }
                game = WordleGame::new(bank.random_common_word(rng));
                counted = false;
                interface.display_new_game_message();
                interface.display_board(&game);
                continue;
            }
            UserAction::Letter(c) => {
                if game.add_letter(c) {
                    interface.display_board(&game);
                }
                continue;
            }
            UserAction::Backspace => {
                if game.remove_letter() {
                    interface.display_board(&game);
                }
                continue;
            }
            UserAction::Shuffle => continue,
            UserAction::Submit => game.submit_row(bank),
            UserAction::Guess(guess) => game.check_guess(&guess, bank),
        };

        match result {
            Ok(outcome) => {
                interface.display_outcome(&game, &outcome);
                if let Some(message) = game.end_message() {
                    summary.games_played += 1;
                    if outcome.status == GameStatus::Won {
                        summary.games_won += 1;
                    }
                    counted = true;
                    info_log!("wordle_loop() - game over: {}", message);
                    interface.display_game_over(&game, &message);
                }
            }
            Err(error) => interface.display_rejection(&error),
        }
    }

    if is_unfinished_attempt(&game, counted) {
        summary.games_played += 1;
    }
    summary
}

/// A game left before it ended counts as played once a guess was scored.
fn is_unfinished_attempt(game: &WordleGame, counted: bool) -> bool {
    !counted && !game.guesses().is_empty()
}

pub fn spelling_bee_loop<I, R>(lists: &WordLists, interface: &mut I, rng: &mut R) -> SessionSummary
where
    I: SpellingBeeInterface + ?Sized,
    R: Rng,
{
    let mut summary = SessionSummary::default();
    let mut game = SpellingBeeGame::from_lists(lists, rng);
    interface.display_honeycomb(&game);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("spelling_bee_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                summary.games_played += 1;
                summary.words_found += game.score();
                game = SpellingBeeGame::from_lists(lists, rng);
                interface.display_new_game_message(&game);
                interface.display_honeycomb(&game);
            }
            UserAction::Shuffle => {
                game.shuffle(rng);
                interface.display_honeycomb(&game);
            }
            UserAction::Guess(word) => match game.check_add_word(&word) {
                Ok(accepted) => {
                    let accepted = accepted.clone();
                    interface.display_accepted(&accepted, &game);
                }
                Err(error) => interface.display_rejection(&error),
            },
            UserAction::Letter(_) | UserAction::Backspace | UserAction::Submit => {}
        }
    }

    summary.games_played += 1;
    summary.words_found += game.score();
    summary
}
