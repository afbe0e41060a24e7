use crate::config::WordListPaths;
use crate::error::WordBankError;
use crate::info_log;
use rand::Rng;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_COMMON_WORDS: &str = include_str!("resources/common_words.txt");
pub const EMBEDDED_ALL_WORDS: &str = include_str!("resources/english_words.txt");
pub const EMBEDDED_PANGRAMS: &str = include_str!("resources/spelling_bee_words.txt");

const WORDLE_WORD_LENGTH: usize = 5;

/// Lowercase every line and keep the ones made only of ASCII letters.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordBankError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WordBankError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_words_from_str(&data))
}

/// Raw word lists shared by both games, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Everyday words; Wordle answers come from here.
    pub common: Vec<String>,
    /// Every acceptable word.
    pub all: Vec<String>,
    /// Spelling Bee seed words with exactly seven distinct letters.
    pub pangrams: Vec<String>,
}

impl WordLists {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            common: load_words_from_str(EMBEDDED_COMMON_WORDS),
            all: load_words_from_str(EMBEDDED_ALL_WORDS),
            pangrams: load_words_from_str(EMBEDDED_PANGRAMS),
        }
    }

    /// Read each configured file, falling back to the embedded list for the rest.
    pub fn load(paths: &WordListPaths) -> Result<Self, WordBankError> {
        let lists = Self {
            common: load_or_embedded(paths.common.as_deref(), EMBEDDED_COMMON_WORDS)?,
            all: load_or_embedded(paths.all.as_deref(), EMBEDDED_ALL_WORDS)?,
            pangrams: load_or_embedded(paths.pangrams.as_deref(), EMBEDDED_PANGRAMS)?,
        };
        info_log!(
            "Loaded word lists: {} common, {} total, {} pangram seeds",
            lists.common.len(),
            lists.all.len(),
            lists.pangrams.len()
        );
        Ok(lists)
    }

    /// Every word from the common and full lists, without repeats.
    pub fn dictionary_words(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.common
            .iter()
            .chain(&self.all)
            .map(String::as_str)
            .filter(move |word| seen.insert(*word))
    }
}

fn load_or_embedded(path: Option<&Path>, embedded: &str) -> Result<Vec<String>, WordBankError> {
    match path {
        Some(path) => {
            info_log!("Reading word list from {}", path.display());
            load_words_from_file(path)
        }
        None => Ok(load_words_from_str(embedded)),
    }
}

/// Five-letter Wordle vocabulary: an answer pool and the set of valid guesses.
#[derive(Debug, Clone)]
pub struct WordBank {
    common_words: Vec<String>,
    all_words: HashSet<String>,
}

impl WordBank {
    /// Build from raw lists. Fails when no five-letter common word is left to
    /// serve as an answer.
    pub fn new(lists: &WordLists) -> Result<Self, WordBankError> {
        let common_words: Vec<String> = five_letter_upper(&lists.common).collect();
        if common_words.is_empty() {
            return Err(WordBankError::Empty("common"));
        }

        let all_words = five_letter_upper(&lists.all)
            .chain(common_words.iter().cloned())
            .collect();

        Ok(Self {
            common_words,
            all_words,
        })
    }

    #[must_use]
    pub fn common_words(&self) -> &[String] {
        &self.common_words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.contains(&word.to_ascii_uppercase())
    }

    pub fn random_common_word<R: Rng>(&self, rng: &mut R) -> &str {
        // `new` guarantees a non-empty answer pool.
        &self.common_words[rng.random_range(0..self.common_words.len())]
    }
}

fn five_letter_upper(words: &[String]) -> impl Iterator<Item = String> + '_ {
    words
        .iter()
        .filter(|word| word.len() == WORDLE_WORD_LENGTH)
        .map(|word| word.to_ascii_uppercase())
}
