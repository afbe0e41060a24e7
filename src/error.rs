use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for startup and session failures
#[derive(Error, Debug)]
pub enum Error {
    #[error("Word list error: {0}")]
    WordBank(#[from] WordBankError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Word list loading errors
#[derive(Error, Debug)]
pub enum WordBankError {
    #[error("Failed to read word list '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The {0} word list has no usable words")]
    Empty(&'static str),
}

/// Reasons a Wordle guess is rejected. The message is shown to the player as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("This is too short. Please enter a word that is 5 letters long")]
    TooShort,

    #[error("This is too long. Please enter a word that is 5 letters long")]
    TooLong,

    #[error("Invalid input, Wordle uses only the alphabets from A-Z so use letters only")]
    InvalidInput,

    #[error("Not a valid word. Please enter a valid word")]
    InvalidWord,

    #[error("This game is over. Start a new game to keep playing")]
    GameOver,
}

/// Reasons a Spelling Bee word is rejected. The message is shown to the player as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeeError {
    #[error("Please input a word")]
    EmptyInput,

    #[error("Too short, must be at least 4 letters long")]
    TooShort,

    #[error("Missing center letter")]
    MissingCenterLetter,

    #[error("Invalid letters. Some of the letters are not in the honeycomb. Use honeycomb letters only!")]
    InvalidLetters,

    #[error("Already found")]
    AlreadyFound,

    #[error("Not in word list")]
    NotInWordList,
}

pub type Result<T> = std::result::Result<T, Error>;
