use crate::cli::Cli;
use log::LevelFilter;
use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = "word-puzzles";
pub const COMMON_WORDS_FILE: &str = "common_words.txt";
pub const ALL_WORDS_FILE: &str = "english_words.txt";
pub const PANGRAMS_FILE: &str = "spelling_bee_words.txt";
pub const LOG_FILE: &str = "word-puzzles.log";

/// Word list files to read instead of the embedded defaults. `None` means embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListPaths {
    pub common: Option<PathBuf>,
    pub all: Option<PathBuf>,
    pub pangrams: Option<PathBuf>,
}

/// Runtime configuration resolved from the command line, environment and data directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub word_lists: WordListPaths,
    pub seed: Option<u64>,
    pub use_tui: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Explicit file flags win; otherwise a list file sitting in the data
    /// directory is picked up; otherwise the embedded list is used.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = cli.data_dir.clone().or_else(default_data_dir);
        let dir = data_dir.as_deref();

        let word_lists = WordListPaths {
            common: resolve_list(cli.common_words.as_deref(), dir, COMMON_WORDS_FILE),
            all: resolve_list(cli.all_words.as_deref(), dir, ALL_WORDS_FILE),
            pangrams: resolve_list(cli.pangrams.as_deref(), dir, PANGRAMS_FILE),
        };

        Self {
            data_dir,
            word_lists,
            seed: cli.seed,
            use_tui: cli.tui,
            log_level: cli.log_level,
        }
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(LOG_FILE)
    }
}

/// `<local data dir>/word-puzzles`, when the platform has one.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(DATA_DIR_NAME))
}

fn resolve_list(explicit: Option<&Path>, data_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        data_dir
            .map(|dir| dir.join(file_name))
            .filter(|path| path.is_file())
    })
}
