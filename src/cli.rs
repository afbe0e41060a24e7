use crate::error::{BeeError, GuessError};
use crate::game_state::{SpellingBeeInterface, UserAction, WordleInterface};
use crate::spelling_bee::{Honeycomb, SpellingBeeGame, Word};
use crate::wordle::{Feedback, GuessOutcome, KeyboardColors, MAX_GUESSES, Tile, WORD_LENGTH, WordleGame};
use crate::debug_log;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use log::LevelFilter;
use std::io::BufRead;
use std::path::PathBuf;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Wordle and Spelling Bee in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Use the full-screen terminal interface instead of line input
    #[arg(long, global = true)]
    pub tui: bool,

    /// Directory holding word list files and the log file
    #[arg(long, env = "WORD_PUZZLES_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Newline-delimited list of common words (Wordle answers)
    #[arg(long, global = true)]
    pub common_words: Option<PathBuf>,

    /// Newline-delimited list of every valid word
    #[arg(long, global = true)]
    pub all_words: Option<PathBuf>,

    /// Newline-delimited list of Spelling Bee seed words (seven distinct letters)
    #[arg(long, global = true)]
    pub pangrams: Option<PathBuf>,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess the hidden five-letter word in six tries
    Wordle,
    /// Find words made from the seven honeycomb letters
    Bee,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Line input

/// Slash commands are matched case-insensitively; anything else is a word.
fn parse_line(line: &str) -> Option<UserAction> {
    let input = line.trim();
    if !input.starts_with('/') {
        return Some(UserAction::Guess(input.to_string()));
    }
    match input.to_lowercase().as_str() {
        "/exit" | "/quit" => Some(UserAction::Exit),
        "/next" => Some(UserAction::NewGame),
        "/shuffle" => Some(UserAction::Shuffle),
        _ => {
            println!("Unknown command '{input}'.");
            None
        }
    }
}

/// Read one line. End of input and read errors both end the session.
pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Some(UserAction::Exit),
        Ok(_) => parse_line(&input),
        Err(e) => {
            debug_log!("read_action() - read failed: {}", e);
            Some(UserAction::Exit)
        }
    }
}

// Wordle rendering

fn colored_tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    let text = text.as_str();
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

fn render_row(row: &[Tile; WORD_LENGTH]) -> String {
    row.iter()
        .map(|tile| colored_tile(tile.letter.unwrap_or('_'), tile.feedback).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `G`/`Y`/`X` pattern for a scored guess.
#[must_use]
pub fn pattern_string(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

fn render_keyboard(keyboard: &KeyboardColors) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| colored_tile(c, keyboard.get(c)).to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn display_wordle_board(game: &WordleGame) {
    let submitted = game.current_row();
    if submitted == 0 {
        println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    }
    for row in game.grid().iter().take(submitted) {
        println!("  {}", render_row(row));
    }
}

/// Line-based Wordle front-end over any `BufRead`.
pub struct WordleCli<R: BufRead> {
    reader: R,
}

impl<R: BufRead> WordleCli<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> WordleInterface for WordleCli<R> {
    fn display_board(&mut self, game: &WordleGame) {
        display_wordle_board(game);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter your guess (5 letters, '/next' for a new game, '/exit' to quit):");
        read_action(&mut self.reader)
    }

    fn display_rejection(&mut self, error: &GuessError) {
        println!("{}", error.to_string().as_str().red());
    }

    fn display_outcome(&mut self, game: &WordleGame, outcome: &GuessOutcome) {
        display_wordle_board(game);
        println!("  {}", pattern_string(&outcome.feedback));
        for line in render_keyboard(game.keyboard()) {
            println!("  {line}");
        }
        let remaining = MAX_GUESSES - game.current_row();
        if !outcome.status.is_over() {
            println!("{remaining} guesses left.");
        }
    }

    fn display_game_over(&mut self, _game: &WordleGame, message: &str) {
        println!("{}", message.bold());
        println!("Type '/next' to play again or '/exit' to quit.");
    }

    fn display_new_game_message(&mut self) {
        println!("New game started.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

// Spelling Bee rendering

/// Three-line honeycomb with the center letter in brackets.
#[must_use]
pub fn render_honeycomb(honeycomb: &Honeycomb) -> Vec<String> {
    let outer: Vec<char> = honeycomb
        .outer()
        .iter()
        .map(char::to_ascii_uppercase)
        .collect();
    let center = honeycomb.center().to_ascii_uppercase();
    vec![
        format!("    {}   {}", outer[0], outer[1]),
        format!("  {}  [{}]  {}", outer[2], center, outer[3]),
        format!("    {}   {}", outer[4], outer[5]),
    ]
}

fn display_found_words(words: &[Word]) {
    println!("You have found {} words!", words.len());
    let listed: Vec<String> = words
        .iter()
        .map(|word| {
            if word.is_pangram() {
                word.text().bold().to_string()
            } else {
                word.text().to_string()
            }
        })
        .collect();
    if !listed.is_empty() {
        println!("  {}", listed.join(", "));
    }
}

/// Line-based Spelling Bee front-end over any `BufRead`.
pub struct BeeCli<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BeeCli<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SpellingBeeInterface for BeeCli<R> {
    fn display_honeycomb(&mut self, game: &SpellingBeeGame) {
        println!();
        for line in render_honeycomb(game.honeycomb()) {
            println!("{line}");
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter a word ('/shuffle', '/next' for a new puzzle, '/exit' to quit):");
        read_action(&mut self.reader)
    }

    fn display_rejection(&mut self, error: &BeeError) {
        println!("{}", error.to_string().as_str().red());
    }

    fn display_accepted(&mut self, word: &Word, game: &SpellingBeeGame) {
        if word.is_pangram() {
            let shouted = word.text().to_uppercase();
            println!("{} {}", shouted.as_str().green().bold(), "Pangram!".yellow().bold());
        } else {
            println!("{}", word.text().to_uppercase().as_str().green());
        }
        display_found_words(game.found_words());
        if game.is_complete() {
            println!("{}", "You found every word!".bold());
        }
    }

    fn display_new_game_message(&mut self, game: &SpellingBeeGame) {
        println!(
            "New puzzle: {} words to find, {} of them pangrams.",
            game.total_words(),
            game.total_pangrams()
        );
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
