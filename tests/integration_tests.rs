// Integration tests for the word-puzzles application
// These tests drive whole sessions through the line interfaces

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use word_puzzles::cli::{BeeCli, Cli, WordleCli};
use word_puzzles::config::{COMMON_WORDS_FILE, Config, WordListPaths};
use word_puzzles::*;

fn lists(common: &str, all: &str, pangrams: &str) -> WordLists {
    WordLists {
        common: load_words_from_str(common),
        all: load_words_from_str(all),
        pangrams: load_words_from_str(pangrams),
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("word-puzzles-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn play_wordle(lists: &WordLists, input: &str) -> SessionSummary {
    let bank = WordBank::new(lists).unwrap();
    let mut interface = WordleCli::new(Cursor::new(input.to_string()));
    let mut rng = StdRng::seed_from_u64(1);
    wordle_loop(&bank, &mut interface, &mut rng)
}

fn play_bee(lists: &WordLists, input: &str) -> SessionSummary {
    let mut interface = BeeCli::new(Cursor::new(input.to_string()));
    let mut rng = StdRng::seed_from_u64(1);
    spelling_bee_loop(lists, &mut interface, &mut rng)
}

#[test]
fn test_wordle_session_win() {
    // With a single common word the answer is known
    let lists = lists("crane", "slate\ntrace", "");
    let summary = play_wordle(&lists, "slate\ntrace\ncrane\n/exit\n");

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 1);
}

#[test]
fn test_wordle_rejected_guesses_do_not_use_rows() {
    let lists = lists("crane", "slate", "");
    // Seven rejections followed by the answer: a consumed row per rejection
    // would have ended the game as a loss first.
    let input = "cr\ncranes\ncr4ne\nzzzzz\n\nabcde\n12345\ncrane\n";
    let summary = play_wordle(&lists, input);

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 1);
}

#[test]
fn test_wordle_session_loss_after_six_rows() {
    let lists = lists("crane", "slate", "");
    let summary = play_wordle(&lists, &"slate\n".repeat(6));

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 0);
}

#[test]
fn test_wordle_guesses_after_game_over_are_ignored() {
    let lists = lists("crane", "slate", "");
    let summary = play_wordle(&lists, "crane\ncrane\nslate\n/exit\n");

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 1);
}

#[test]
fn test_wordle_new_game_counts_abandoned_game() {
    let lists = lists("crane", "slate", "");
    let summary = play_wordle(&lists, "slate\n/next\ncrane\n/next\n/exit\n");

    // Abandoned, won, and a fresh game with no guesses
    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.games_won, 1);
}

#[test]
fn test_wordle_new_game_without_guesses_is_not_played() {
    let lists = lists("crane", "slate", "");

    let by_exit = play_wordle(&lists, "/exit\n");
    let by_next = play_wordle(&lists, "/next\n/next\n/exit\n");

    assert_eq!(by_exit.games_played, 0);
    assert_eq!(by_next.games_played, 0);
    assert_eq!(by_next, by_exit);
}

#[test]
fn test_wordle_end_of_input_ends_session() {
    let lists = lists("crane", "", "");
    let summary = play_wordle(&lists, "");

    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn test_bee_session_finds_seed_pangram() {
    let lists = lists("plant\nplanet", "slant\npetals", "planets");
    let summary = play_bee(&lists, "planets\nplanets\n/shuffle\nxyz\n/exit\n");

    // The seed word is always in the puzzle; the repeat is rejected
    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.words_found, 1);
}

#[test]
fn test_bee_new_puzzle_carries_words_found() {
    let lists = lists("", "", "planets");
    let summary = play_bee(&lists, "planets\n/next\nplanets\n/exit\n");

    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.words_found, 2);
}

#[test]
fn test_bee_without_seeds_uses_random_letters() {
    let lists = lists("crane", "slate", "");
    let summary = play_bee(&lists, "/shuffle\n/exit\n");

    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.words_found, 0);
}

#[test]
fn test_bee_game_from_lists_is_reproducible() {
    let lists = lists("plant\nplanet\nslant", "petals\nstaple", "planets\nhamster");
    let first = SpellingBeeGame::from_lists(&lists, &mut StdRng::seed_from_u64(9));
    let second = SpellingBeeGame::from_lists(&lists, &mut StdRng::seed_from_u64(9));

    assert_eq!(first.honeycomb(), second.honeycomb());
    assert_eq!(first.total_words(), second.total_words());
    assert!(first.total_pangrams() >= 1);
}

#[test]
fn test_bee_rejections_follow_check_order() {
    let honeycomb = Honeycomb::new('a', ['p', 'l', 'n', 'e', 't', 's']).unwrap();
    let mut game = SpellingBeeGame::new(honeycomb, ["plant", "planets", "slant"]);

    assert_eq!(game.check_add_word(""), Err(BeeError::EmptyInput));
    assert_eq!(game.check_add_word("pla"), Err(BeeError::TooShort));
    assert_eq!(game.check_add_word("pelt"), Err(BeeError::MissingCenterLetter));
    assert_eq!(game.check_add_word("plank"), Err(BeeError::InvalidLetters));
    assert!(game.check_add_word("PLANT").is_ok());
    assert_eq!(game.check_add_word("plant"), Err(BeeError::AlreadyFound));
    assert_eq!(game.check_add_word("latent"), Err(BeeError::NotInWordList));

    let pangram = game.check_add_word("planets").unwrap();
    assert!(pangram.is_pangram());
    assert_eq!(game.score(), 2);
}

#[test]
fn test_word_lists_load_from_temp_files() {
    let dir = temp_dir("lists");
    let common = dir.join("common.txt");
    let all = dir.join("all.txt");
    let pangrams = dir.join("pangrams.txt");
    fs::write(&common, "Crane\nhouse\n").unwrap();
    fs::write(&all, "slate\nplanets\n").unwrap();
    fs::write(&pangrams, "planets\n").unwrap();

    let lists = WordLists::load(&WordListPaths {
        common: Some(common),
        all: Some(all),
        pangrams: Some(pangrams),
    })
    .unwrap();
    let bank = WordBank::new(&lists).unwrap();

    assert_eq!(bank.common_words(), &["CRANE".to_string(), "HOUSE".to_string()]);
    assert!(bank.contains("slate"));
    assert_eq!(lists.pangrams, vec!["planets".to_string()]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_word_list_is_an_error() {
    let paths = WordListPaths {
        common: Some(PathBuf::from("/definitely/not/here/common.txt")),
        ..WordListPaths::default()
    };

    let error: Error = WordLists::load(&paths).unwrap_err().into();
    assert!(error.to_string().contains("common.txt"));
}

#[test]
fn test_config_picks_up_lists_from_data_dir() {
    let dir = temp_dir("config");
    fs::write(dir.join(COMMON_WORDS_FILE), "crane\n").unwrap();
    let dir_arg = dir.to_string_lossy().to_string();

    let cli = <Cli as clap::Parser>::try_parse_from(["word-puzzles", "wordle", "--data-dir", &dir_arg])
        .unwrap();
    let config = Config::from_cli(&cli);

    assert_eq!(config.word_lists.common, Some(dir.join(COMMON_WORDS_FILE)));
    assert_eq!(config.word_lists.all, None);
    assert_eq!(config.log_file(), dir.join("word-puzzles.log"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_embedded_lists_play_both_games() {
    let lists = WordLists::embedded();

    let summary = play_wordle(&lists, "/exit\n");
    assert_eq!(summary.games_played, 0);

    let mut rng = StdRng::seed_from_u64(3);
    let game = SpellingBeeGame::from_lists(&lists, &mut rng);
    assert!(game.total_pangrams() >= 1);
    assert!(!game.is_complete());
}
