// Library interface for word-puzzles
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod spelling_bee;
pub mod tui;
pub mod wordbank;
pub mod wordle;

// Re-export commonly used items for easier testing
pub use error::{BeeError, Error, GuessError, Result, WordBankError};
pub use game_state::{SessionSummary, UserAction, spelling_bee_loop, wordle_loop};
pub use spelling_bee::{Honeycomb, SpellingBeeGame, Word};
pub use wordbank::{WordBank, WordLists, load_words_from_file, load_words_from_str};
pub use wordle::{Feedback, GameStatus, WordleGame, score_guess};
