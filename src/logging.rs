// Conditional logging macros - only active in debug builds

use crate::config::Config;
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Install the global logger.
///
/// The full-screen interface owns the terminal, so its records are appended
/// to a log file instead of stderr. `RUST_LOG` wins over the configured level.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    if config.use_tui && config.log_level != LevelFilter::Off {
        let path = config.log_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let log_file = OpenOptions::new().create(true).append(true).open(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    // A logger may already be installed when called from tests.
    let _ = builder.try_init();
    Ok(())
}
