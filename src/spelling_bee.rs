//! Spelling Bee rules: the honeycomb, the per-puzzle dictionary and word validation.

use crate::error::BeeError;
use crate::wordbank::WordLists;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;
use std::fmt;

pub const MIN_WORD_LENGTH: usize = 4;
pub const HONEYCOMB_SIZE: usize = 7;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Seven distinct lowercase letters; index 0 is the center letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Honeycomb {
    letters: [char; HONEYCOMB_SIZE],
}

impl Honeycomb {
    /// Build from a center letter and six outer letters. Returns `None` unless
    /// all seven are distinct ASCII letters.
    #[must_use]
    pub fn new(center: char, outer: [char; HONEYCOMB_SIZE - 1]) -> Option<Self> {
        let mut letters = [center; HONEYCOMB_SIZE];
        letters[1..].copy_from_slice(&outer);
        let letters = letters.map(|c| c.to_ascii_lowercase());

        let distinct: HashSet<char> = letters.iter().copied().collect();
        (distinct.len() == HONEYCOMB_SIZE && letters.iter().all(char::is_ascii_lowercase))
            .then_some(Self { letters })
    }

    /// Strip repeated letters from a seed pangram and pick a random center.
    /// Returns `None` when the seed does not have exactly seven distinct letters.
    pub fn from_pangram<R: Rng>(seed: &str, rng: &mut R) -> Option<Self> {
        let mut letters = distinct_letters(&seed.to_ascii_lowercase());
        if letters.len() != HONEYCOMB_SIZE {
            return None;
        }
        let center = letters.remove(rng.random_range(0..HONEYCOMB_SIZE));
        let outer: [char; HONEYCOMB_SIZE - 1] = letters.try_into().ok()?;
        Self::new(center, outer)
    }

    /// Seven random distinct letters.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let alphabet: Vec<char> = ALPHABET.chars().collect();
        let picked: Vec<char> = alphabet
            .choose_multiple(rng, HONEYCOMB_SIZE)
            .copied()
            .collect();
        let mut letters = ['a'; HONEYCOMB_SIZE];
        letters.copy_from_slice(&picked);
        Self { letters }
    }

    #[must_use]
    pub fn center(&self) -> char {
        self.letters[0]
    }

    #[must_use]
    pub fn outer(&self) -> &[char] {
        &self.letters[1..]
    }

    #[must_use]
    pub fn letters(&self) -> &[char; HONEYCOMB_SIZE] {
        &self.letters
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    /// Reorder the outer letters. The center stays put.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.letters[1..].shuffle(rng);
    }

    /// True when `word` is long enough, uses the center and nothing outside the honeycomb.
    fn accepts(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LENGTH
            && word.contains(self.center())
            && word.chars().all(|c| self.contains(c))
    }
}

impl fmt::Display for Honeycomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outer: String = self.outer().iter().collect();
        write!(f, "[{}] {}", self.center().to_ascii_uppercase(), outer.to_ascii_uppercase())
    }
}

fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    word.chars().filter(|c| seen.insert(*c)).collect()
}

/// A word accepted for a particular honeycomb. The pangram flag is computed
/// once, when the word is classified, and cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    pangram: bool,
}

impl Word {
    fn classify(text: &str, honeycomb: &Honeycomb) -> Self {
        let used = distinct_letters(text);
        let pangram = honeycomb.letters().iter().all(|letter| used.contains(letter));
        Self {
            text: text.to_string(),
            pangram,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_pangram(&self) -> bool {
        self.pangram
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One Spelling Bee puzzle: the honeycomb, the words it allows and the words found so far.
#[derive(Debug, Clone)]
pub struct SpellingBeeGame {
    honeycomb: Honeycomb,
    dictionary: HashSet<String>,
    pangram_total: usize,
    found: Vec<Word>,
}

impl SpellingBeeGame {
    /// Build a puzzle around `honeycomb`, keeping every source word it accepts.
    pub fn new<'a, I>(honeycomb: Honeycomb, source_words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let dictionary: HashSet<String> = source_words
            .into_iter()
            .map(str::to_ascii_lowercase)
            .filter(|word| honeycomb.accepts(word))
            .collect();
        let pangram_total = dictionary
            .iter()
            .filter(|word| Word::classify(word, &honeycomb).is_pangram())
            .count();
        info_log!(
            "SpellingBeeGame::new() - honeycomb {}, {} words, {} pangrams",
            honeycomb,
            dictionary.len(),
            pangram_total
        );

        Self {
            honeycomb,
            dictionary,
            pangram_total,
            found: Vec::new(),
        }
    }

    /// Pick a random seed pangram and build the puzzle from the common and full
    /// lists. The seed is always part of the dictionary. With no usable seed
    /// the honeycomb is seven random letters.
    pub fn from_lists<R: Rng>(lists: &WordLists, rng: &mut R) -> Self {
        let seeds: Vec<&String> = lists
            .pangrams
            .iter()
            .filter(|word| distinct_letters(word).len() == HONEYCOMB_SIZE)
            .collect();

        match seeds.choose(rng) {
            Some(seed) => {
                debug_log!("from_lists() - seed word '{}'", seed);
                let honeycomb = Honeycomb::from_pangram(seed, rng)
                    .unwrap_or_else(|| Honeycomb::random(rng));
                Self::new(
                    honeycomb,
                    lists.dictionary_words().chain(std::iter::once(seed.as_str())),
                )
            }
            None => {
                info_log!("from_lists() - no seven-letter seed, using random letters");
                Self::new(Honeycomb::random(rng), lists.dictionary_words())
            }
        }
    }

    #[must_use]
    pub fn honeycomb(&self) -> &Honeycomb {
        &self.honeycomb
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.honeycomb.shuffle(rng);
    }

    #[must_use]
    pub fn found_words(&self) -> &[Word] {
        &self.found
    }

    /// One point per word found.
    #[must_use]
    pub fn score(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub fn total_pangrams(&self) -> usize {
        self.pangram_total
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.dictionary.len()
    }

    /// Validate a word and record it as found.
    ///
    /// Checks run in order: length, center letter, honeycomb letters, already
    /// found, dictionary.
    pub fn check_add_word(&mut self, candidate: &str) -> Result<&Word, BeeError> {
        let word = candidate.trim().to_lowercase();
        debug_log!("check_add_word() - '{}' against {}", word, self.honeycomb);

        if word.is_empty() {
            return Err(BeeError::EmptyInput);
        }
        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(BeeError::TooShort);
        }
        if !word.contains(self.honeycomb.center()) {
            return Err(BeeError::MissingCenterLetter);
        }
        if !word.chars().all(|c| self.honeycomb.contains(c)) {
            return Err(BeeError::InvalidLetters);
        }
        if self.found.iter().any(|found| found.text == word) {
            return Err(BeeError::AlreadyFound);
        }
        if !self.dictionary.contains(&word) {
            return Err(BeeError::NotInWordList);
        }

        let word = Word::classify(&word, &self.honeycomb);
        info_log!(
            "check_add_word() - accepted '{}' (pangram: {})",
            word,
            word.is_pangram()
        );
        self.found.push(word);
        Ok(&self.found[self.found.len() - 1])
    }
}
