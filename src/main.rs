use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_puzzles::cli::{BeeCli, Command, WordleCli, parse_cli};
use word_puzzles::config::Config;
use word_puzzles::tui::{BeeTui, WordleTui};
use word_puzzles::{Result, SessionSummary, WordBank, WordLists, info_log, logging};
use word_puzzles::{spelling_bee_loop, wordle_loop};

fn main() -> ExitCode {
    let cli = parse_cli();
    let config = Config::from_cli(&cli);

    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to open log file '{}': {e}", config.log_file().display());
    }
    info_log!("Starting {:?} with {:?}", cli.command, config);

    match run(cli.command, &config) {
        Ok(summary) => {
            info_log!("Session finished: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<SessionSummary> {
    let lists = WordLists::load(&config.word_lists)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let summary = match (command, config.use_tui) {
        (Command::Wordle, use_tui) => {
            let bank = WordBank::new(&lists)?;
            println!("Loaded {} words.", bank.len());
            if use_tui {
                let mut interface = WordleTui::new()?;
                wordle_loop(&bank, &mut interface, &mut rng)
            } else {
                let mut interface = WordleCli::new(io::stdin().lock());
                wordle_loop(&bank, &mut interface, &mut rng)
            }
        }
        (Command::Bee, true) => {
            let mut interface = BeeTui::new()?;
            spelling_bee_loop(&lists, &mut interface, &mut rng)
        }
        (Command::Bee, false) => {
            let mut interface = BeeCli::new(io::stdin().lock());
            spelling_bee_loop(&lists, &mut interface, &mut rng)
        }
    };

    if !config.use_tui {
        println!(
            "Games played: {}, won: {}, words found: {}",
            summary.games_played, summary.games_won, summary.words_found
        );
    }
    Ok(summary)
}
